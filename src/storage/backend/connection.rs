use std::borrow::Cow;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{Result, ShortenerError};
use migration::{Migrator, MigratorTrait};

/// 连接 SQLite 数据库（自动建库，WAL 模式）
pub async fn connect_sqlite(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::sqlite::{
        SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
    };
    use std::str::FromStr;

    let opt = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| ShortenerError::database_config(format!("SQLite URL 解析失败: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.pool_size.max(1))
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect_with(opt)
        .await
        .map_err(|e| {
            ShortenerError::database_connection(format!("无法连接到 SQLite 数据库: {}", e))
        })?;

    // 转换为 Sea-ORM 的 DatabaseConnection
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// 连接通用数据库（MySQL/PostgreSQL）
pub async fn connect_generic(
    config: &DatabaseConfig,
    backend_name: &str,
) -> Result<DatabaseConnection> {
    let pool_size = config.pool_size.max(1);
    let timeout = Duration::from_secs(config.connect_timeout);

    let mut opt = ConnectOptions::new(driver_url(&config.database_url).into_owned());
    opt.max_connections(pool_size)
        .min_connections(pool_size.min(2))
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    Database::connect(opt).await.map_err(|e| {
        ShortenerError::database_connection(format!(
            "无法连接到 {} 数据库: {}",
            backend_name.to_uppercase(),
            e
        ))
    })
}

/// sqlx 只认 `mysql://`，MariaDB 走同一个驱动
fn driver_url(database_url: &str) -> Cow<'_, str> {
    match database_url.strip_prefix("mariadb://") {
        Some(rest) => Cow::Owned(format!("mysql://{}", rest)),
        None => Cow::Borrowed(database_url),
    }
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .map_err(|e| ShortenerError::database_operation(format!("迁移失败: {}", e)))?;

    info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_url_maps_mariadb_to_mysql() {
        assert_eq!(
            driver_url("mariadb://root:pw@localhost:3306/links"),
            "mysql://root:pw@localhost:3306/links"
        );
    }

    #[test]
    fn test_driver_url_keeps_other_schemes() {
        for url in [
            "mysql://root@localhost/links",
            "postgres://u:p@localhost/links",
        ] {
            assert!(matches!(driver_url(url), Cow::Borrowed(u) if u == url));
        }
    }
}
