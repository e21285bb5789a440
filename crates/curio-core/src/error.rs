//! Error types for curio.

use thiserror::Error;

/// Result type alias for curio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for all curio operations.
///
/// Extraction itself never surfaces these to callers; they travel between
/// the backend layer and the engine, which degrades to local extraction
/// instead of failing.
#[derive(Error, Debug)]
pub enum Error {
    /// Backend request error (transport failure or non-success status).
    #[error("Backend error: {0}")]
    Backend(String),

    /// Payload parse error (malformed JSON or unexpected shape).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error (missing or invalid settings).
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Backend(err.to_string())
    }
}
