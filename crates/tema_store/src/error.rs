//! Error types for backing store operations.

use thiserror::Error;

/// Errors that can occur when reading from or subscribing to the backing store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Configuration error (missing env vars, invalid values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure from the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Change feed failed after it was established
    #[error("Stream error: {0}")]
    Stream(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Change channel closed before it was established
    #[error("Change channel closed")]
    Closed,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
