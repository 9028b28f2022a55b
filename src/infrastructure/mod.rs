//! 基础设施：配置之外的外部依赖

pub mod database;
pub mod logger;
pub mod product_store;
