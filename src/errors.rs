use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum ShortenerError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    DuplicateRecord(String),
    Validation(String),
    InvalidUrl(String),
    InvalidStoredUrl(String),
    NotFound(String),
    CodeSpaceExhausted(String),
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::DatabaseConfig(_) => "E001",
            ShortenerError::DatabaseConnection(_) => "E002",
            ShortenerError::DatabaseOperation(_) => "E003",
            ShortenerError::DuplicateRecord(_) => "E004",
            ShortenerError::Validation(_) => "E005",
            ShortenerError::InvalidUrl(_) => "E006",
            ShortenerError::InvalidStoredUrl(_) => "E007",
            ShortenerError::NotFound(_) => "E008",
            ShortenerError::CodeSpaceExhausted(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::DatabaseConfig(_) => "Database Configuration Error",
            ShortenerError::DatabaseConnection(_) => "Database Connection Error",
            ShortenerError::DatabaseOperation(_) => "Database Operation Error",
            ShortenerError::DuplicateRecord(_) => "Duplicate Record",
            ShortenerError::Validation(_) => "Validation Error",
            ShortenerError::InvalidUrl(_) => "Invalid URL",
            ShortenerError::InvalidStoredUrl(_) => "Invalid Stored URL",
            ShortenerError::NotFound(_) => "Resource Not Found",
            ShortenerError::CodeSpaceExhausted(_) => "Short Code Space Exhausted",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenerError::DatabaseConfig(msg)
            | ShortenerError::DatabaseConnection(msg)
            | ShortenerError::DatabaseOperation(msg)
            | ShortenerError::DuplicateRecord(msg)
            | ShortenerError::Validation(msg)
            | ShortenerError::InvalidUrl(msg)
            | ShortenerError::InvalidStoredUrl(msg)
            | ShortenerError::NotFound(msg)
            | ShortenerError::CodeSpaceExhausted(msg) => msg,
        }
    }

    /// HTTP 状态码映射：校验类 400，不存在 404，其余一律 500
    pub fn http_status(&self) -> StatusCode {
        match self {
            ShortenerError::Validation(_) | ShortenerError::InvalidUrl(_) => {
                StatusCode::BAD_REQUEST
            }
            ShortenerError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 是否为客户端错误（决定日志级别）
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// 格式化为彩色输出（用于启动失败时的终端输出）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

// 便捷的构造函数
impl ShortenerError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DatabaseOperation(msg.into())
    }

    pub fn duplicate_record<T: Into<String>>(msg: T) -> Self {
        ShortenerError::DuplicateRecord(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Validation(msg.into())
    }

    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        ShortenerError::InvalidUrl(msg.into())
    }

    pub fn invalid_stored_url<T: Into<String>>(msg: T) -> Self {
        ShortenerError::InvalidStoredUrl(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortenerError::NotFound(msg.into())
    }

    pub fn code_space_exhausted<T: Into<String>>(msg: T) -> Self {
        ShortenerError::CodeSpaceExhausted(msg.into())
    }
}

// 唯一索引冲突单独归类，其余数据库错误统一为 DatabaseOperation
impl From<sea_orm::DbErr> for ShortenerError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                ShortenerError::DuplicateRecord(detail)
            }
            _ => ShortenerError::DatabaseOperation(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(
            ShortenerError::validation("Missing short code").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShortenerError::invalid_url("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ShortenerError::not_found("Short code not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert!(err.is_client_error());
    }

    #[test]
    fn test_infrastructure_errors_map_to_500() {
        for err in [
            ShortenerError::database_operation("boom"),
            ShortenerError::database_connection("refused"),
            ShortenerError::duplicate_record("url"),
            ShortenerError::code_space_exhausted("16 attempts"),
            ShortenerError::invalid_stored_url("::"),
        ] {
            assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!err.is_client_error());
        }
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = ShortenerError::not_found("Short code not found");
        assert_eq!(err.to_string(), "Resource Not Found: Short code not found");
        assert_eq!(err.code(), "E008");
    }

    #[test]
    fn test_generic_db_error_is_database_operation() {
        let err: ShortenerError = sea_orm::DbErr::Custom("disk full".to_string()).into();
        assert!(matches!(err, ShortenerError::DatabaseOperation(_)));
    }
}
