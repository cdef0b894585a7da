//! SeaORM storage backend
//!
//! Persists `url_records` in SQLite, MySQL/MariaDB or PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::errors::{Result, ShortenerError};

use connection::{connect_generic, connect_sqlite, run_migrations};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(ShortenerError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig, backend_name: &str) -> Result<Self> {
        if config.database_url.is_empty() {
            return Err(ShortenerError::database_config("DATABASE_URL 未设置"));
        }

        let db = if backend_name == "sqlite" {
            connect_sqlite(config).await?
        } else {
            connect_generic(config, backend_name).await?
        };

        let storage = Self::from_connection(db, backend_name);

        // 运行迁移
        run_migrations(&storage.db).await?;

        info!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    /// 包装一个已建立的连接（不执行迁移）
    fn from_connection(db: DatabaseConnection, backend_name: &str) -> Self {
        SeaOrmStorage {
            db,
            backend_name: backend_name.to_string(),
        }
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 关闭连接池；失败只记录日志，不影响退出
    pub async fn close(&self) {
        match self.db.clone().close().await {
            Ok(()) => info!("{} connection closed", self.backend_name.to_uppercase()),
            Err(e) => warn!("关闭数据库连接失败: {}", e),
        }
    }
}
