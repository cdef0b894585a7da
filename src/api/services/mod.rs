pub mod frontend;
pub mod helpers;
pub mod redirect;
pub mod shorten;
pub mod types;

use std::sync::Arc;

use actix_web::web;

use crate::services::LinkService;

pub use frontend::{FrontendService, FrontendSettings};
pub use redirect::{RedirectService, RedirectSettings, redirect_routes};
pub use shorten::{ShortenService, shorten_routes};
pub use types::{ApiResponse, LinkResponse, ShortenRequest};

/// 注册全部路由与共享状态
///
/// 顺序：`/api/shorten/*` → `/{shortCode}` 重定向 → 前端资源 / index.html
/// → 404 JSON。服务器与集成测试共用同一份配置。
pub fn configure_routes(
    link_service: Arc<LinkService>,
    frontend: FrontendSettings,
    redirect: RedirectSettings,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(link_service))
            .app_data(web::Data::new(frontend))
            .app_data(web::Data::new(redirect))
            .service(shorten_routes())
            .service(redirect_routes())
            .default_service(web::to(FrontendService::handle_fallback));
    }
}
