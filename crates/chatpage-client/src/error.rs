//! Error types for the HTTP transport.

use chatpage_core::PageError;
use thiserror::Error;

/// Errors that can occur when talking to the chat endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL could not be used.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<ClientError> for PageError {
    fn from(err: ClientError) -> Self {
        PageError::Transport(err.to_string())
    }
}
