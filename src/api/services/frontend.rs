//! 前端静态资源
//!
//! 运行时从 `frontend.dist_dir` 读取文件：命中的资源直接返回，其余 GET
//! 请求回落到 `index.html`（单页应用路由），都不满足时返回 404 JSON。

use std::path::{Component, Path, PathBuf};

use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, error, trace};

use crate::config::FrontendConfig;

use super::helpers::error_response;

const MSG_UNHANDLED_ROUTE: &str = "Unhandled route";

/// 前端资源设置，以 `web::Data` 注入
#[derive(Debug, Clone)]
pub struct FrontendSettings {
    pub enabled: bool,
    pub dist_dir: PathBuf,
}

impl FrontendSettings {
    pub fn from_config(config: &FrontendConfig) -> Self {
        Self {
            enabled: config.enabled,
            dist_dir: config.dist_dir.clone(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            dist_dir: PathBuf::new(),
        }
    }
}

pub struct FrontendService;

impl FrontendService {
    /// 所有未匹配路由的入口
    pub async fn handle_fallback(
        req: HttpRequest,
        settings: web::Data<FrontendSettings>,
    ) -> HttpResponse {
        let readable = req.method() == Method::GET || req.method() == Method::HEAD;

        if settings.enabled && readable {
            let rel = req.path().trim_start_matches('/');
            if !rel.is_empty()
                && let Some(response) = Self::serve_asset(&settings, rel).await
            {
                return response;
            }

            if let Some(response) = Self::serve_index(&settings).await {
                return response;
            }
        }

        Self::handle_unhandled(req).await
    }

    /// 读取 dist 目录下的静态文件；不存在或路径非法时返回 None
    pub async fn serve_asset(settings: &FrontendSettings, rel: &str) -> Option<HttpResponse> {
        if !settings.enabled {
            return None;
        }
        let path = Self::resolve(&settings.dist_dir, rel)?;

        let metadata = tokio::fs::metadata(&path).await.ok()?;
        if !metadata.is_file() {
            return None;
        }

        match tokio::fs::read(&path).await {
            Ok(content) => {
                trace!("Serving static file: {}", path.display());
                Some(
                    HttpResponse::Ok()
                        .content_type(Self::get_content_type(rel))
                        .body(content),
                )
            }
            Err(e) => {
                debug!("Static file {} unreadable: {}", path.display(), e);
                None
            }
        }
    }

    async fn serve_index(settings: &FrontendSettings) -> Option<HttpResponse> {
        let index = settings.dist_dir.join("index.html");
        match tokio::fs::read(&index).await {
            Ok(content) => Some(
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .insert_header(("Cache-Control", "no-cache"))
                    .body(content),
            ),
            Err(e) => {
                debug!("index.html not available at {}: {}", index.display(), e);
                None
            }
        }
    }

    /// 404 JSON：`{ success: false, message: "Unhandled route" }`
    pub async fn handle_unhandled(req: HttpRequest) -> HttpResponse {
        error!(
            "Request {} {} failed: {}",
            req.method(),
            req.path(),
            MSG_UNHANDLED_ROUTE
        );
        error_response(StatusCode::NOT_FOUND, MSG_UNHANDLED_ROUTE)
    }

    /// 拼接 dist 目录与相对路径，拒绝 `..`、绝对路径等越界组件
    fn resolve(dist_dir: &Path, rel: &str) -> Option<PathBuf> {
        let rel = Path::new(rel);
        if rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(dist_dir.join(rel))
    }

    /// 根据文件扩展名确定 Content-Type
    pub fn get_content_type(path: &str) -> &'static str {
        match path.rsplit('.').next() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") | Some("mjs") => "application/javascript",
            Some("json") | Some("map") => "application/json",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("webp") => "image/webp",
            Some("txt") => "text/plain; charset=utf-8",
            Some("woff") => "font/woff",
            Some("woff2") => "font/woff2",
            Some("ttf") => "font/ttf",
            _ => "application/octet-stream",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_content_type() {
        assert_eq!(FrontendService::get_content_type("assets/app.js"), "application/javascript");
        assert_eq!(FrontendService::get_content_type("style.css"), "text/css");
        assert_eq!(FrontendService::get_content_type("vite.svg"), "image/svg+xml");
        assert_eq!(
            FrontendService::get_content_type("LICENSE"),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dist = Path::new("client/dist");
        assert!(FrontendService::resolve(dist, "../Cargo.toml").is_none());
        assert!(FrontendService::resolve(dist, "assets/../../secret").is_none());
        assert!(FrontendService::resolve(dist, "/etc/passwd").is_none());
        assert_eq!(
            FrontendService::resolve(dist, "assets/index.js"),
            Some(PathBuf::from("client/dist/assets/index.js"))
        );
    }
}
