//! 页面框架：文档头、页头和主体

use super::header::render_header;
use super::product_grid::render_product_grid;
use crate::app::shop::model::Product;

pub const SITE_TITLE: &str = "Webshop";
pub const SITE_DESCRIPTION: &str = "A minimal fashion webshop";

pub const LOAD_ERROR_TEXT: &str = "Failed to load products";
pub const LISTING_HEADING: &str = "NEW ARRIVALS";
pub const NOT_FOUND_TEXT: &str = "Page not found";

const STYLESHEET: &str = "\
*{box-sizing:border-box;margin:0;padding:0}\
body{min-height:100vh;background:#f8f8f8;color:#111827;font-family:Inter,system-ui,sans-serif;font-weight:300}\
a{color:inherit;text-decoration:none}\
.site-header{position:fixed;top:0;left:0;right:0;z-index:50;background:rgba(255,255,255,.95)}\
.header-bar{display:flex;align-items:center;justify-content:space-between;height:5rem;padding:0 1.5rem;border-bottom:1px solid #f3f4f6}\
.header-left,.header-right{display:flex;gap:1.5rem}\
.header-brand{flex:1;text-align:center}\
.brand{font-size:1.25rem;letter-spacing:.2em}\
.icon-button{background:none;border:0;padding:.5rem;cursor:pointer}\
.icon-button:hover,.nav-link:hover,.product-card:hover .product-image img{opacity:.7}\
.icon{display:inline-block;width:1.25rem;height:1.25rem;border:1px solid currentColor}\
.site-nav{border-bottom:1px solid #f3f4f6}\
.site-nav ul{display:flex;justify-content:center;gap:3rem;height:3rem;align-items:center;list-style:none;font-size:13px}\
.page-main{max-width:1400px;margin:0 auto;padding:9rem 1.5rem 4rem}\
.page-heading{font-size:1.5rem;font-weight:300;margin-bottom:3rem;text-align:center}\
.page-error{text-align:center;color:#ef4444}\
.page-message{text-align:center}\
.product-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(300px,1fr));gap:4rem 2rem}\
.product-card{display:block}\
.product-image{aspect-ratio:4/5;background:#fff;margin-bottom:1.5rem;overflow:hidden}\
.product-image img{width:100%;height:100%;object-fit:cover;transition:opacity .3s}\
.product-name{font-size:.875rem;font-weight:300}\
.product-category{font-size:.75rem;color:#6b7280}\
.product-price{font-size:.875rem}";

/// 首页的两种结果
#[derive(Debug)]
pub enum ListingOutcome<'a> {
    Loaded(&'a [Product]),
    Failed,
}

/// 包裹完整 HTML 文档，`main` 为主体内容
pub fn render_document(main: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<meta name="description" content="{description}">"#,
            "<style>{style}</style>",
            "</head>",
            "<body>",
            "{header}",
            r#"<main class="page-main">{main}</main>"#,
            "</body>",
            "</html>",
        ),
        title = SITE_TITLE,
        description = SITE_DESCRIPTION,
        style = STYLESHEET,
        header = render_header(),
        main = main,
    )
}

/// 首页：加载失败只显示错误文本，否则显示标题和商品网格
pub fn render_listing_page(outcome: ListingOutcome<'_>) -> String {
    let main = match outcome {
        ListingOutcome::Failed => {
            format!(r#"<div class="page-error">{}</div>"#, LOAD_ERROR_TEXT)
        }
        ListingOutcome::Loaded(products) => format!(
            r#"<h1 class="page-heading">{}</h1>{}"#,
            LISTING_HEADING,
            render_product_grid(products)
        ),
    };
    render_document(&main)
}

pub fn render_not_found_page() -> String {
    render_document(&format!(
        r#"<div class="page-message">{}</div>"#,
        NOT_FOUND_TEXT
    ))
}
