//! Link management service
//!
//! Business logic behind the `/api/shorten` handlers and the redirect
//! route. Handlers only translate HTTP in and out; everything touching the
//! store goes through here.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ShortenerConfig;
use crate::errors::{Result, ShortenerError};
use crate::services::code_generator::CodeGenerator;
use crate::storage::{SeaOrmStorage, UrlRecord};
use crate::utils::{UrlNormalizeError, normalize, validate_target};

/// Result of link creation
#[derive(Debug, Clone)]
pub struct LinkCreateResult {
    pub record: UrlRecord,
    /// false 表示 url 已存在，返回的是旧记录
    pub created: bool,
}

/// Service for link management operations
pub struct LinkService {
    storage: Arc<SeaOrmStorage>,
    generator: CodeGenerator,
}

impl LinkService {
    pub fn new(storage: Arc<SeaOrmStorage>, config: &ShortenerConfig) -> Self {
        Self {
            storage,
            generator: CodeGenerator::from_config(config),
        }
    }

    /// Create a short link, or return the existing one for the same url
    pub async fn create_link(&self, url: &str) -> Result<LinkCreateResult> {
        let url = validate_target(url).map_err(into_request_error)?;

        if let Some(existing) = self.storage.find_by_url(&url).await? {
            info!(
                "LinkService: reused '{}' for '{}'",
                existing.short_code, existing.url
            );
            return Ok(LinkCreateResult {
                record: existing,
                created: false,
            });
        }

        let code = self.generator.generate(&*self.storage).await?;
        let record = self.storage.insert(&url, &code).await?;

        info!("LinkService: created '{}' -> '{}'", record.short_code, record.url);
        Ok(LinkCreateResult {
            record,
            created: true,
        })
    }

    pub async fn get_link(&self, code: &str) -> Result<UrlRecord> {
        self.storage
            .find_by_code(code)
            .await?
            .ok_or_else(|| ShortenerError::not_found(format!("Link '{}' not found", code)))
    }

    /// Replace the target url; the short code never changes
    pub async fn update_link(&self, code: &str, url: &str) -> Result<UrlRecord> {
        let url = validate_target(url).map_err(into_request_error)?;

        let record = self.storage.update_url(code, &url).await?;
        info!("LinkService: updated '{}' -> '{}'", code, record.url);
        Ok(record)
    }

    pub async fn delete_link(&self, code: &str) -> Result<()> {
        self.storage.remove(code).await?;
        info!("LinkService: deleted '{}'", code);
        Ok(())
    }

    /// Full record including `stats.accessCount`
    pub async fn get_stats(&self, code: &str) -> Result<UrlRecord> {
        self.get_link(code).await
    }

    /// Resolve a code to its normalized target without counting it
    pub async fn resolve_target(&self, code: &str) -> Result<String> {
        let record = self.get_link(code).await?;

        normalize(&record.url).map_err(|e| {
            warn!("Stored url for '{}' is not redirectable: {}", code, e);
            ShortenerError::invalid_stored_url(e.to_string())
        })
    }

    /// Resolve a code to its normalized target and count the access
    pub async fn resolve_redirect(&self, code: &str) -> Result<String> {
        let target = self.resolve_target(code).await?;
        self.storage.increment_access(code).await?;
        Ok(target)
    }
}

fn into_request_error(err: UrlNormalizeError) -> ShortenerError {
    match err {
        UrlNormalizeError::Empty => ShortenerError::validation(err.to_string()),
        _ => ShortenerError::invalid_url(err.to_string()),
    }
}
