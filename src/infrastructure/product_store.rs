//! 商品存储
//!
//! 外部数据库只读访问。`ProductStore` 是处理器与数据库之间唯一的接缝，
//! 测试中可以替换为内存实现。

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPool;

use crate::app::shop::model::Product;

/// 商品表名
pub const PRODUCTS_TABLE: &str = "products";

/// 存储错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StoreError::Unavailable(msg.into())
    }
}

/// 商品集合的只读接口
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 读取全部商品，顺序由后端决定
    async fn select_all(&self) -> Result<Vec<Product>, StoreError>;

    /// 最多读取 `limit` 行，整行原样返回（包括模型之外的列和 NULL）
    async fn select_rows(&self, limit: i64) -> Result<Vec<Value>, StoreError>;
}

/// 基于 Postgres 连接池的商品存储
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn select_rows_sql() -> String {
    format!(
        "SELECT row_to_json(p) FROM {} p LIMIT $1",
        PRODUCTS_TABLE
    )
}

// id 和 price 在不同部署中的列类型不同，统一转换为 text / float8
fn select_sql() -> String {
    format!(
        "SELECT id::text AS id, name, price::float8 AS price, image_url, category FROM {}",
        PRODUCTS_TABLE
    )
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn select_all(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(&select_sql())
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn select_rows(&self, limit: i64) -> Result<Vec<Value>, StoreError> {
        let rows = sqlx::query_scalar::<_, Value>(&select_rows_sql())
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
