use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::LinkService;
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub link_service: Arc<LinkService>,
}

/// 准备服务器启动的上下文：连接数据库、执行迁移、构建服务
///
/// 数据库连接失败是唯一的致命错误，由调用方决定以非零状态退出。
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let link_service = Arc::new(LinkService::new(storage.clone(), &config.shortener));

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        storage,
        link_service,
    })
}
