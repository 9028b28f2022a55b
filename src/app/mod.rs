//! HTTP 应用：路由、共享状态和各功能模块

pub mod diagnostics;
pub mod shop;
pub mod views;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::product_store::ProductStore;
use shop::service::ProductService;

pub const HOME_PATH: &str = "/";
pub const DIAGNOSTIC_PATH: &str = "/api/test-supabase";
pub const HEALTH_PATH: &str = "/health";

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            product_service: ProductService::new(store),
        }
    }
}

/// 构建路由及中间件
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .route(HOME_PATH, get(shop::handler::home_page))
        .route(DIAGNOSTIC_PATH, get(diagnostics::handler::test_store))
        .route(HEALTH_PATH, get(diagnostics::handler::health_check))
        .fallback(shop::handler::not_found)
        .with_state(state);

    let router = match server.request_timeout() {
        Some(timeout) => router.layer(TimeoutLayer::new(timeout)),
        None => router,
    };

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_logging_middleware)),
    )
}
