//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::response::ErrorResponse;
use crate::infrastructure::product_store::StoreError;

/// JSON 接口的错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_maps_to_500_with_verbatim_message() {
        let err = AppError::from(StoreError::unavailable("connection refused"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_into_response_status() {
        let err = AppError::from(StoreError::unavailable("timed out"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
