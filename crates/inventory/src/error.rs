//! Inventory API errors with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StockError;

/// Errors returned by the inventory endpoints.
///
/// Refusal bodies carry the offending `product_id` alongside the message so
/// callers can report which line of a batch failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("product {0} not found in inventory")]
    NotFound(common::ProductId),

    #[error(transparent)]
    Stock(#[from] StockError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, product_id) = match self {
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("product {id} not found in inventory"),
                id,
            ),
            ApiError::Stock(err) => {
                let status = match err {
                    StockError::ProductNotFound(_) => StatusCode::NOT_FOUND,
                    StockError::InsufficientStock(_) => StatusCode::BAD_REQUEST,
                };
                (status, err.to_string(), err.product_id())
            }
        };

        let body = serde_json::json!({ "error": message, "product_id": product_id });
        (status, axum::Json(body)).into_response()
    }
}
