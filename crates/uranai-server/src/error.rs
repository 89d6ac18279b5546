//! Error types for the Uranai server.

use thiserror::Error;

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in server operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider returned a non-success status
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider response did not have the expected shape
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Transport-level HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
