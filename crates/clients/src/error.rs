//! Client error type shared by all collaborator contracts.

use common::ProductId;
use thiserror::Error;

/// Errors surfaced by collaborator clients.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The requested entity does not exist on the collaborator.
    #[error("not found: {0}")]
    NotFound(String),

    /// The collaborator understood the request and refused it on a business
    /// rule, identifying the offending product when it named one.
    #[error("rejected: {message}")]
    Rejected {
        product_id: Option<ProductId>,
        message: String,
    },

    /// The call never produced a usable response: connection failure,
    /// timeout, or a malformed/unexpected reply.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
