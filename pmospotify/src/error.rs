//! Error types for the Spotify relay client

use reqwest::StatusCode;

/// Result type alias for Spotify relay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when querying the Spotify relay
///
/// Each variant is a distinct failure kind so callers can pick a reply
/// without inspecting the underlying transport error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// The relay answered with a non-success status
    #[error("API returned error status: {0}")]
    Status(StatusCode),

    /// The body was received but is not the expected JSON document
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other transport failure (DNS, connection reset, TLS...)
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// A configured endpoint is not a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status(status)
        } else {
            Self::Http(err)
        }
    }
}

impl Error {
    /// Short label for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Status(_) => "status",
            Self::Json(_) => "json",
            Self::Http(_) => "http",
            Self::InvalidUrl(_) => "url",
        }
    }
}
