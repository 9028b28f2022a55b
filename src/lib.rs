//! # Webshop
//!
//! 服务端渲染的极简商店前台：
//! - `GET /` 商品列表页
//! - `GET /api/test-supabase` 数据库连通性诊断
//! - `GET /health` 存活检查

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{build_router, AppState};
pub use app::shop::model::Product;
pub use config::Config;
pub use infrastructure::product_store::{PgProductStore, ProductStore, StoreError};
