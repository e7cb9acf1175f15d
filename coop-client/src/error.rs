//! Client error types

use thiserror::Error;

use crate::slot::SlotError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server reported an error (`{error}` body, status preserved)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Cart slot read/write failed
    #[error("Cart slot error: {0}")]
    Slot(#[from] SlotError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
