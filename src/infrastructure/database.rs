//! 数据库基础设施

use sqlx::{
    postgres::{PgConnectOptions, PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;

use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 延迟建立连接：数据库不可达时服务仍可启动，错误在查询时返回
    pub fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        let options: PgConnectOptions = config.url.parse()?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}
