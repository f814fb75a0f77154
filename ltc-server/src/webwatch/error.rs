//! WebWatch transport error types.

use std::time::Duration;

/// Errors from fetching WebWatch pages.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The page does not exist (HTTP 404).
    #[error("page not found: {url}")]
    NotFound { url: String },

    /// No complete response within the timeout.
    #[error("timed out after {timeout:?} fetching {url}")]
    Timeout { url: String, timeout: Duration },

    /// Any other non-success status.
    #[error("upstream returned {status} for {url}")]
    Status { url: String, status: u16 },

    /// A URL could not be built from the configured base.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection or protocol failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    /// Classify a reqwest failure, separating timeouts from other errors.
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else {
            TransportError::Http(err)
        }
    }
}
