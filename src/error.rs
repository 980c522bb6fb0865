//! Error handling for tinycurl

use thiserror::Error;

/// Main error type for tinycurl operations
#[derive(Error, Debug)]
pub enum CurlError {
    /// The candidate string is not an absolute URL with a supported scheme and host.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A request was dispatched before any URL was successfully set.
    #[error("A URL has to be set in order to complete the request")]
    MissingUrl,

    /// The transport reported a failure; both fields are taken verbatim from it.
    #[error("{code}: {message}")]
    Transport { code: i32, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for tinycurl operations
pub type Result<T> = std::result::Result<T, CurlError>;
