//! Payment API errors with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::WalletError;

/// Errors returned by the payment endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Wallet(WalletError::InvalidAmount) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };
        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
