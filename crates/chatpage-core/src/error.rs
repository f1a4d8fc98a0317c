//! Page controller errors.

use thiserror::Error;

/// Errors surfaced by the page controller.
///
/// Everything except [`PageError::MissingElement`] is recoverable in the
/// sense that it is routed to the controller's error handler instead of
/// aborting the page.
#[derive(Debug, Error)]
pub enum PageError {
    /// A required element is absent from the page at startup.
    #[error("Required element not found: {selector}")]
    MissingElement { selector: String },

    /// The server answered with a non-2xx status or without a body.
    #[error("Unexpected response: {status}")]
    UnexpectedResponse { status: u16, body: String },

    /// A streamed line could not be parsed as a message.
    #[error("Malformed message line: {source}")]
    MalformedLine {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    /// Network or runtime failure reported by a transport.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl PageError {
    /// Create a missing-element error.
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_response_display() {
        let err = PageError::UnexpectedResponse {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected response: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_missing_element_display() {
        let err = PageError::missing("#spinner");
        assert_eq!(err.to_string(), "Required element not found: #spinner");
        assert_eq!(err.status(), None);
    }
}
