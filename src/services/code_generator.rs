//! Short code generation
//!
//! Draws random codes and checks each candidate against a `CodeRegistry`
//! until a free one is found. The loop is bounded by `max_attempts`.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ShortenerConfig;
use crate::errors::{Result, ShortenerError};
use crate::storage::SeaOrmStorage;
use crate::utils::generate_random_code;

/// 已占用短码的查询接口
#[async_trait]
pub trait CodeRegistry: Send + Sync {
    async fn code_exists(&self, code: &str) -> Result<bool>;
}

#[async_trait]
impl CodeRegistry for SeaOrmStorage {
    async fn code_exists(&self, code: &str) -> Result<bool> {
        SeaOrmStorage::code_exists(self, code).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: usize,
    max_attempts: u32,
}

impl CodeGenerator {
    pub fn new(length: usize, max_attempts: u32) -> Self {
        Self {
            length: length.max(1),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn from_config(config: &ShortenerConfig) -> Self {
        Self::new(config.code_length, config.max_attempts)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// 生成一个当前未被占用的短码
    ///
    /// 检查与写入之间没有加锁，并发冲突由唯一索引兜底。
    pub async fn generate<R>(&self, registry: &R) -> Result<String>
    where
        R: CodeRegistry + ?Sized,
    {
        for attempt in 1..=self.max_attempts {
            let candidate = generate_random_code(self.length);
            if !registry.code_exists(&candidate).await? {
                debug!("Generated short code {} (attempt {})", candidate, attempt);
                return Ok(candidate);
            }
            debug!("Short code collision: {} (attempt {})", candidate, attempt);
        }

        warn!(
            "No free short code of length {} after {} attempts",
            self.length, self.max_attempts
        );
        Err(ShortenerError::code_space_exhausted(format!(
            "no free short code after {} attempts",
            self.max_attempts
        )))
    }
}
