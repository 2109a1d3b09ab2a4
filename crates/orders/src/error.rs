//! Order API errors with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::orchestrator::OrderError;

/// API-level error wrapper for the order endpoints.
#[derive(Debug)]
pub enum ApiError {
    Order(OrderError),
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        ApiError::Order(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Order(err) = self;
        let status = match &err {
            OrderError::InvalidInput(_) | OrderError::InsufficientInventory { .. } => {
                StatusCode::BAD_REQUEST
            }
            OrderError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            OrderError::Upstream(_) => StatusCode::BAD_GATEWAY,
            OrderError::InventoryCommitFailed(_) => {
                tracing::error!(error = %err, "inventory commit failed mid-workflow");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({ "error": err.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
