//! API 请求 / 响应类型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::UrlRecord;

/// 统一响应外壳：`{ success, message, payload? }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

/// POST / PUT 请求体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

impl ShortenRequest {
    /// 非空的 url；空串与缺失同等对待
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// 不含统计信息的记录视图（创建、查询、更新接口使用）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i32,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlRecord> for LinkResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            url: record.url,
            short_code: record.short_code,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
