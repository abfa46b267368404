//! Fetch error types

use thiserror::Error;

/// Result type alias using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors raised while querying the issue tracker
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status returned by the search API
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode search response: {0}")]
    Decode(String),

    /// Request could not be built
    #[error("Invalid search request: {0}")]
    InvalidRequest(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
