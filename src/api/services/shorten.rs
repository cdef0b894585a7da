//! `/api/shorten` CRUD 接口

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Scope, error::InternalError, web};

use crate::services::LinkService;

use super::frontend::FrontendService;
use super::helpers::{
    MSG_MISSING_SHORT_CODE, client_error, error_from_shortener, error_response, extract_code,
    success_response,
};
use super::types::{LinkResponse, ShortenRequest};

const MSG_MISSING_URL: &str = "Missing URL in request body";
const MSG_MISSING_BODY: &str = "Missing request body";
const MSG_ORIGINAL_NOT_FOUND: &str = "Original URL not found";
const MSG_CODE_NOT_FOUND: &str = "Short code not found";

/// 请求体上限
const JSON_LIMIT: usize = 16 * 1024;

/// 请求体缺失或无法解析时返回 400 外壳，而不是 actix 默认的纯文本错误
fn json_config(missing_message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(move |err, req| {
            tracing::warn!(
                "Request {} {} failed: {} ({})",
                req.method(),
                req.path(),
                missing_message,
                err
            );
            let response = error_response(StatusCode::BAD_REQUEST, missing_message);
            InternalError::from_response(err, response).into()
        })
}

pub struct ShortenService;

impl ShortenService {
    pub async fn create_short(
        req: HttpRequest,
        body: web::Json<ShortenRequest>,
        service: web::Data<Arc<LinkService>>,
    ) -> HttpResponse {
        let Some(url) = body.url() else {
            return client_error(&req, StatusCode::BAD_REQUEST, MSG_MISSING_URL);
        };

        match service.create_link(url).await {
            Ok(result) if result.created => success_response(
                &req,
                StatusCode::CREATED,
                "Shortened url created",
                LinkResponse::from(result.record),
            ),
            Ok(result) => {
                success_response(&req, StatusCode::OK, "URL already exists", result.record)
            }
            Err(e) => error_from_shortener(&req, &e, MSG_CODE_NOT_FOUND),
        }
    }

    pub async fn get_url(
        req: HttpRequest,
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> HttpResponse {
        let Some(code) = extract_code(&path) else {
            return client_error(&req, StatusCode::BAD_REQUEST, MSG_MISSING_SHORT_CODE);
        };

        match service.get_link(code).await {
            Ok(record) => success_response(
                &req,
                StatusCode::OK,
                "Original URL found",
                LinkResponse::from(record),
            ),
            Err(e) => error_from_shortener(&req, &e, MSG_ORIGINAL_NOT_FOUND),
        }
    }

    pub async fn update_url(
        req: HttpRequest,
        path: web::Path<String>,
        body: web::Json<ShortenRequest>,
        service: web::Data<Arc<LinkService>>,
    ) -> HttpResponse {
        let Some(url) = body.url() else {
            return client_error(&req, StatusCode::BAD_REQUEST, MSG_MISSING_BODY);
        };
        let Some(code) = extract_code(&path) else {
            return client_error(&req, StatusCode::BAD_REQUEST, MSG_MISSING_SHORT_CODE);
        };

        match service.update_link(code, url).await {
            Ok(record) => success_response(
                &req,
                StatusCode::OK,
                "Original URL updated",
                LinkResponse::from(record),
            ),
            Err(e) => error_from_shortener(&req, &e, MSG_CODE_NOT_FOUND),
        }
    }

    pub async fn delete_url(
        req: HttpRequest,
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> HttpResponse {
        let Some(code) = extract_code(&path) else {
            return client_error(&req, StatusCode::BAD_REQUEST, MSG_MISSING_SHORT_CODE);
        };

        match service.delete_link(code).await {
            Ok(()) => {
                tracing::info!(
                    "Request {} {} succeeded: Short code deleted",
                    req.method(),
                    req.path()
                );
                HttpResponse::NoContent().finish()
            }
            Err(e) => error_from_shortener(&req, &e, MSG_CODE_NOT_FOUND),
        }
    }

    pub async fn get_stats(
        req: HttpRequest,
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> HttpResponse {
        let Some(code) = extract_code(&path) else {
            return client_error(&req, StatusCode::BAD_REQUEST, MSG_MISSING_SHORT_CODE);
        };

        match service.get_stats(code).await {
            Ok(record) => success_response(&req, StatusCode::OK, "Short code stats found", record),
            Err(e) => error_from_shortener(&req, &e, MSG_CODE_NOT_FOUND),
        }
    }
}

/// 注册 `/api/shorten` 下的全部路由
pub fn shorten_routes() -> Scope {
    web::scope("/api/shorten")
        .service(
            web::resource("")
                .app_data(json_config(MSG_MISSING_URL))
                .route(web::post().to(ShortenService::create_short))
                .default_service(web::to(FrontendService::handle_unhandled)),
        )
        .service(
            web::resource("/{shortCode}/stats")
                .route(web::get().to(ShortenService::get_stats))
                .route(web::head().to(ShortenService::get_stats))
                .default_service(web::to(FrontendService::handle_unhandled)),
        )
        .service(
            web::resource("/{shortCode}")
                .app_data(json_config(MSG_MISSING_BODY))
                .route(web::get().to(ShortenService::get_url))
                .route(web::head().to(ShortenService::get_url))
                .route(web::put().to(ShortenService::update_url))
                .route(web::delete().to(ShortenService::delete_url))
                .default_service(web::to(FrontendService::handle_unhandled)),
        )
}
