//! 响应构建帮助函数

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::errors::ShortenerError;

use super::types::ApiResponse;

pub const MSG_INTERNAL_ERROR: &str = "Internal server error";
pub const MSG_MISSING_SHORT_CODE: &str = "Missing short code";

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    success: bool,
    message: impl Into<String>,
    payload: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            success,
            message: message.into(),
            payload,
        })
}

/// 构建成功响应，并记录一行成功日志
pub fn success_response<T: Serialize>(
    req: &HttpRequest,
    status: StatusCode,
    message: &str,
    payload: T,
) -> HttpResponse {
    info!("Request {} {} succeeded: {}", req.method(), req.path(), message);
    json_response(status, true, message, Some(payload))
}

/// 构建错误响应（无 payload）
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    json_response::<()>(status, false, message, None)
}

/// 客户端错误：记录 warn 并返回
pub fn client_error(req: &HttpRequest, status: StatusCode, message: &str) -> HttpResponse {
    warn!("Request {} {} failed: {}", req.method(), req.path(), message);
    error_response(status, message)
}

/// 从 ShortenerError 构建错误响应
///
/// NotFound 使用调用方给出的文案；校验错误原样返回；其余统一为 500，
/// 细节只进日志。
pub fn error_from_shortener(
    req: &HttpRequest,
    err: &ShortenerError,
    not_found_message: &str,
) -> HttpResponse {
    let status = err.http_status();
    match err {
        ShortenerError::NotFound(_) => client_error(req, status, not_found_message),
        _ if err.is_client_error() => client_error(req, status, err.message()),
        _ => {
            error!(
                "Request {} {} failed: [{}] {}",
                req.method(),
                req.path(),
                err.code(),
                err
            );
            error_response(status, MSG_INTERNAL_ERROR)
        }
    }
}

/// 取出并 trim 路径中的短码；空白视为缺失
pub fn extract_code(raw: &str) -> Option<&str> {
    let code = raw.trim();
    (!code.is_empty()).then_some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_code() {
        assert_eq!(extract_code(" abc "), Some("abc"));
        assert_eq!(extract_code("   "), None);
        assert_eq!(extract_code(""), None);
    }
}
