//! 服务端渲染的页面

pub mod format;
pub mod header;
pub mod layout;
pub mod product_grid;

pub use layout::{render_listing_page, render_not_found_page, ListingOutcome};
