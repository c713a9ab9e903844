//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur when talking to the domain-health API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status {
        status: u16,
        /// Human-readable reason supplied by the server, when present.
        detail: Option<String>,
    },

    /// The request could not complete (offline, DNS, timeout).
    #[error("connection failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
