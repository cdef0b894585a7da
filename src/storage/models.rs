use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 短链接记录
///
/// `url` 为提交时的原始字符串（去除首尾空白），重定向时才做规范化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub id: i32,
    pub url: String,
    pub short_code: String,
    pub stats: AccessStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessStats {
    #[serde(default)]
    pub access_count: u64,
}
