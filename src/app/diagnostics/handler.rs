//! 诊断接口处理器

use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::app::AppState;
use crate::core::error::AppError;
use crate::core::response::{DataResponse, HealthResponse};

/// GET /api/test-supabase —— 读取至多一行以确认数据库可达
pub async fn test_store(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Value>>>, AppError> {
    let rows = state.product_service.probe().await?;
    Ok(Json(DataResponse::new(rows)))
}

/// GET /health —— 只表示进程存活，不访问数据库
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
