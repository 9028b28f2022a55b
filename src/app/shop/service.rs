//! 商店业务服务

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

use super::model::Product;
use crate::infrastructure::product_store::{ProductStore, StoreError};

/// 诊断查询读取的行数上限
pub const PROBE_LIMIT: i64 = 1;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// 读取全部商品，不重试
    pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        match self.store.select_all().await {
            Ok(products) => {
                debug!("读取到 {} 个商品", products.len());
                Ok(products)
            }
            Err(e) => {
                error!("读取商品失败: {}", e);
                Err(e)
            }
        }
    }

    /// 连通性检查：最多读取一行，整行原样返回
    pub async fn probe(&self) -> Result<Vec<Value>, StoreError> {
        self.store.select_rows(PROBE_LIMIT).await.map_err(|e| {
            error!("存储连通性检查失败: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct RecordingStore {
        rows: Vec<Product>,
        limits: Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl ProductStore for RecordingStore {
        async fn select_all(&self) -> Result<Vec<Product>, StoreError> {
            Ok(self.rows.clone())
        }

        async fn select_rows(&self, limit: i64) -> Result<Vec<Value>, StoreError> {
            self.limits.lock().unwrap().push(limit);
            Ok(self
                .rows
                .iter()
                .take(limit as usize)
                .map(|p| json!({ "id": p.id, "name": p.name, "created_at": "2024-01-01" }))
                .collect())
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Item {id}"),
            price: 10.0,
            image_url: format!("/{id}.jpg"),
            category: "Tops".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_keeps_store_order() {
        let store = Arc::new(RecordingStore {
            rows: vec![product("3"), product("1"), product("2")],
            limits: Mutex::new(Vec::new()),
        });
        let service = ProductService::new(store);

        let ids: Vec<String> = service
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[tokio::test]
    async fn test_probe_reads_at_most_one_row() {
        let store = Arc::new(RecordingStore {
            rows: vec![product("1"), product("2")],
            limits: Mutex::new(Vec::new()),
        });
        let service = ProductService::new(store.clone());

        let rows = service.probe().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["created_at"], "2024-01-01");
        assert_eq!(*store.limits.lock().unwrap(), vec![1]);
    }
}
