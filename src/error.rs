//! Error types for Panda Market API operations.

use thiserror::Error;

/// Errors that can occur during Panda Market API operations.
#[derive(Debug, Error)]
pub enum MarketError {
    /// API request completed with a non-2xx status.
    #[error("Panda Market API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for Panda Market operations.
pub type Result<T> = core::result::Result<T, MarketError>;
