//! Cart API errors with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clients::ClientError;
use thiserror::Error;

/// Errors returned by the cart endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("catalog unavailable: {0}")]
    Upstream(String),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(what) => ApiError::NotFound(format!("{what} not found")),
            ClientError::Rejected { message, .. } => ApiError::InvalidInput(message),
            ClientError::Transport(msg) => ApiError::Upstream(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => {
                tracing::warn!(error = %msg, "catalog lookup failed");
                (StatusCode::BAD_GATEWAY, msg)
            }
        };
        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
