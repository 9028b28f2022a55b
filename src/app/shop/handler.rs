//! 商店页面处理器

use axum::{extract::State, http::StatusCode, response::Html};

use crate::app::views::{render_listing_page, render_not_found_page, ListingOutcome};
use crate::app::AppState;

/// GET / —— 每次请求查询一次，失败时只显示固定错误文本
pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    let html = match state.product_service.list_products().await {
        Ok(products) => render_listing_page(ListingOutcome::Loaded(&products)),
        Err(_) => render_listing_page(ListingOutcome::Failed),
    };
    Html(html)
}

/// 未匹配的路径，包括尚未实现的商品详情页
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render_not_found_page()))
}
