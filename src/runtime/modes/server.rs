//! Server mode
//!
//! Builds the HTTP server, binds it and runs until SIGINT/SIGTERM. Shutdown
//! order: stop accepting connections, drain in-flight requests, close the
//! database pool.

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{FrontendSettings, RedirectSettings, configure_routes};
use crate::config::{CorsConfig, StaticConfig};
use crate::runtime::lifetime;

/// 启动时校验一次 CORS 配置
fn validate_cors_config(cors_config: &CorsConfig) {
    if cors_config.enabled && cors_config.allowed_origins.is_empty() {
        warn!(
            "CORS enabled but allowed_origins is empty. \
            No cross-origin requests will be allowed. \
            Use '[\"*\"]' for any origin."
        );
    }
}

/// Build CORS middleware from configuration
fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    // 关闭时使用浏览器默认的同源策略
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: Arc<StaticConfig>) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(&config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let link_service = startup.link_service.clone();

    let frontend = FrontendSettings::from_config(&config.frontend);
    let redirect = RedirectSettings::from_config(&config.shortener);
    if frontend.enabled && !frontend.dist_dir.join("index.html").exists() {
        warn!(
            "Frontend enabled but {} has no index.html",
            frontend.dist_dir.display()
        );
    }

    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let workers = config.server.workers.max(1);
    info!("Using {} workers for the server", workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .configure(configure_routes(
                link_service.clone(),
                frontend.clone(),
                redirect,
            ))
    })
    .workers(workers)
    // 信号由 listen_for_shutdown 统一处理
    .disable_signals();

    let bind_address = (config.server.host.as_str(), config.server.port);
    let server = server
        .bind(bind_address)
        .with_context(|| format!("Failed to bind {}:{}", bind_address.0, bind_address.1))?
        .run();
    info!(
        "Server listening on http://{}:{}",
        config.server.host, config.server.port
    );

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        let signal = lifetime::shutdown::listen_for_shutdown().await;
        warn!("{} received, stopping HTTP server", signal);
        handle.stop(true).await;
    });

    server.await.context("HTTP server terminated with an error")?;
    info!("HTTP server stopped");

    lifetime::shutdown::close_storage(&storage).await;
    Ok(())
}
