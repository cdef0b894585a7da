//! URL 规范化与校验
//!
//! 存储的是用户提交的原始字符串（去除首尾空白），重定向前再规范化为
//! 绝对 URL；没有协议时默认补 `https://`。

use url::Url;

use migration::URL_MAX_LENGTH;

/// URL 规范化错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlNormalizeError {
    Empty,
    TooLong(usize),
    DangerousProtocol(String),
    Unparseable(String),
}

impl std::fmt::Display for UrlNormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL cannot be empty"),
            Self::TooLong(len) => write!(
                f,
                "URL is too long: {} characters (max {})",
                len, URL_MAX_LENGTH
            ),
            Self::DangerousProtocol(proto) => write!(f, "Dangerous protocol blocked: {}", proto),
            Self::Unparseable(raw) => write!(f, "Invalid URL: {}", raw),
        }
    }
}

impl std::error::Error for UrlNormalizeError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// 规范化 URL
///
/// 先按绝对 URL 解析，失败则补 `https://` 再解析一次，返回序列化结果。
///
/// ```
/// use shortener::utils::normalize;
///
/// assert_eq!(normalize("example.com").unwrap(), "https://example.com/");
/// assert_eq!(normalize("https://example.com").unwrap(), "https://example.com/");
/// ```
pub fn normalize(raw: &str) -> Result<String, UrlNormalizeError> {
    parse_lenient(raw).map(String::from)
}

/// 创建 / 更新前校验目标地址，返回去除空白后的待存储值
///
/// 检查项目：
/// 1. 非空
/// 2. 长度不超过数据库列宽
/// 3. 可以被规范化
/// 4. 规范化后的协议不在危险列表中
pub fn validate_target(raw: &str) -> Result<String, UrlNormalizeError> {
    let trimmed = raw.trim();

    let len = trimmed.chars().count();
    if len > URL_MAX_LENGTH as usize {
        return Err(UrlNormalizeError::TooLong(len));
    }

    let parsed = parse_lenient(trimmed)?;
    let scheme = parsed.scheme();
    if DANGEROUS_PROTOCOLS.contains(&scheme) {
        return Err(UrlNormalizeError::DangerousProtocol(format!("{}:", scheme)));
    }

    Ok(trimmed.to_string())
}

fn parse_lenient(raw: &str) -> Result<Url, UrlNormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizeError::Empty);
    }

    Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("https://{}", trimmed)))
        .map_err(|_| UrlNormalizeError::Unparseable(trimmed.to_string()))
}
