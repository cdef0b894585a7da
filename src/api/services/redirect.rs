use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, Resource, web};
use tracing::info;

use crate::config::ShortenerConfig;
use crate::services::LinkService;

use super::frontend::{FrontendService, FrontendSettings};
use super::helpers::{MSG_MISSING_SHORT_CODE, client_error, error_from_shortener, extract_code};

/// 重定向设置，以 `web::Data` 注入
#[derive(Debug, Clone, Copy, Default)]
pub struct RedirectSettings {
    /// true => 301 Moved Permanently, false => 302 Found
    pub permanent: bool,
}

impl RedirectSettings {
    pub fn from_config(config: &ShortenerConfig) -> Self {
        Self {
            permanent: config.permanent_redirect,
        }
    }

    fn status(&self) -> StatusCode {
        if self.permanent {
            StatusCode::MOVED_PERMANENTLY
        } else {
            StatusCode::FOUND
        }
    }
}

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_redirect(
        req: HttpRequest,
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
        frontend: web::Data<FrontendSettings>,
        settings: web::Data<RedirectSettings>,
    ) -> HttpResponse {
        let captured = path.into_inner();

        // 短码字母表不含 '.'，带扩展名的单段路径一定是前端资源
        if captured.contains('.') {
            return match FrontendService::serve_asset(&frontend, &captured).await {
                Some(response) => response,
                None => FrontendService::handle_fallback(req, frontend).await,
            };
        }

        let Some(code) = extract_code(&captured) else {
            return client_error(&req, StatusCode::BAD_REQUEST, MSG_MISSING_SHORT_CODE);
        };

        // HEAD 只探测目标地址，不计入访问次数
        let resolved = if req.method() == Method::HEAD {
            service.resolve_target(code).await
        } else {
            service.resolve_redirect(code).await
        };

        match resolved {
            Ok(target) => {
                info!(
                    "Request {} {} succeeded: Redirected to {}",
                    req.method(),
                    req.path(),
                    target
                );
                HttpResponse::build(settings.status())
                    .insert_header(("Location", target))
                    .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
                    .finish()
            }
            Err(e) => error_from_shortener(&req, &e, "Original URL not found"),
        }
    }
}

pub fn redirect_routes() -> Resource {
    web::resource("/{shortCode}")
        .route(web::get().to(RedirectService::handle_redirect))
        .route(web::head().to(RedirectService::handle_redirect))
        .default_service(web::to(FrontendService::handle_fallback))
}
