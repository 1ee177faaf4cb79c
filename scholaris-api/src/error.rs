//! Error types for directory service calls.
//!
//! The console does not distinguish error kinds beyond their message; every
//! variant's `Display` carries the text shown verbatim to the operator.

use thiserror::Error;

/// Failure of a directory query or mutation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed against the service
    #[error("Network error: {0}")]
    Transport(String),

    /// Service answered with a non-success HTTP status
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Service reported a failure in the response envelope
    #[error("{0}")]
    Server(String),

    /// Success envelope arrived without a data payload
    #[error("Empty response from server")]
    EmptyResponse,

    /// Response body could not be decoded
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
