//! Error types for pagejson

use std::path::PathBuf;

use thiserror::Error;

/// Error type for a pagejson run
#[derive(Debug, Error)]
pub enum Error {
    /// Target URL does not parse
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Target URL uses a scheme other than http or https
    #[error("unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    /// HTTP client error (DNS, connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("{url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// JSON encoding of the extraction result failed
    #[error("failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Output file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for failures that happen before a page body is available.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl(_) | Error::UnsupportedScheme(_) | Error::Http(_) | Error::Status { .. }
        )
    }
}

/// Result type for pagejson operations
pub type Result<T> = std::result::Result<T, Error>;
