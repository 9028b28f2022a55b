//! 商店数据模型

use serde::{Deserialize, Serialize};

/// 商品表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
}
