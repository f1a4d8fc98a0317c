//! HTTP seam between the controller and the network.

use std::collections::VecDeque;
use std::fmt;

use async_trait::async_trait;

use crate::error::PageError;
use crate::message::FormFields;

/// Incremental reader over a response body.
#[async_trait(?Send)]
pub trait BodyReader {
    /// Next chunk of body bytes, or `None` once the body is exhausted.
    async fn read_chunk(&mut self) -> Result<Option<Vec<u8>>, PageError>;
}

/// Issues requests against the chat endpoint.
#[async_trait(?Send)]
pub trait Transport {
    /// `GET` the path.
    async fn get(&self, path: &str) -> Result<ChatResponse, PageError>;

    /// `POST` the form fields to the path.
    async fn post_form(&self, path: &str, form: &FormFields) -> Result<ChatResponse, PageError>;
}

/// Response status plus an optional streaming body.
pub struct ChatResponse {
    pub status: u16,
    pub body: Option<Box<dyn BodyReader>>,
}

impl ChatResponse {
    /// Response with a streaming body.
    pub fn new(status: u16, body: impl BodyReader + 'static) -> Self {
        Self {
            status,
            body: Some(Box::new(body)),
        }
    }

    /// Response that carries no readable body.
    pub fn without_body(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Drain the body into a string, decoding lossily.
    pub async fn text(self) -> Result<String, PageError> {
        let Some(mut body) = self.body else {
            return Ok(String::new());
        };
        let mut bytes = Vec::new();
        while let Some(chunk) = body.read_chunk().await? {
            bytes.extend_from_slice(&chunk);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl fmt::Debug for ChatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatResponse")
            .field("status", &self.status)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

/// Body made of pre-split chunks.
#[derive(Debug, Default)]
pub struct MemoryBody {
    chunks: VecDeque<Vec<u8>>,
}

impl MemoryBody {
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait(?Send)]
impl BodyReader for MemoryBody {
    async fn read_chunk(&mut self) -> Result<Option<Vec<u8>>, PageError> {
        Ok(self.chunks.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_text_joins_chunks() {
        let response = ChatResponse::new(500, MemoryBody::new(["internal ", "error"]));
        assert!(!response.is_ok());
        assert_eq!(response.text().await.unwrap(), "internal error");
    }

    #[tokio::test]
    async fn test_text_without_body() {
        let response = ChatResponse::without_body(204);
        assert!(response.is_ok());
        assert_eq!(response.text().await.unwrap(), "");
    }
}
