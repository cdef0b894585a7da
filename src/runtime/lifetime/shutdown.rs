use std::time::Duration;

use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::storage::SeaOrmStorage;

/// 关闭数据库连接的超时时间（秒）
const CLOSE_TIMEOUT_SECS: u64 = 10;

/// 等待 SIGINT / SIGTERM，返回收到的信号名
pub async fn listen_for_shutdown() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}

/// HTTP 服务停止后关闭数据库连接池
pub async fn close_storage(storage: &SeaOrmStorage) {
    match timeout(Duration::from_secs(CLOSE_TIMEOUT_SECS), storage.close()).await {
        Ok(()) => info!("Storage shutdown completed"),
        Err(_) => error!(
            "Closing storage timed out after {} seconds",
            CLOSE_TIMEOUT_SECS
        ),
    }
}
