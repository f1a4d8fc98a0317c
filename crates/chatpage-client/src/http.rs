//! HTTP transport over `reqwest`.

use async_trait::async_trait;
use chatpage_core::{BodyReader, ChatResponse, FormFields, PageError, Transport};
use tracing::{debug, trace};

use crate::error::ClientError;

/// Transport for the chat endpoint of a server.
///
/// No request timeout is set: a slow stream keeps the request open for as
/// long as the server keeps it open.
pub struct HttpTransport {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for a server base URL such as `http://127.0.0.1:8000`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed =
            reqwest::Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<ChatResponse, PageError> {
        let url = self.url(path);
        debug!(url = %url, "GET request");

        let response = self.inner.get(&url).send().await.map_err(ClientError::from)?;
        Ok(into_chat_response(response))
    }

    async fn post_form(&self, path: &str, form: &FormFields) -> Result<ChatResponse, PageError> {
        let url = self.url(path);
        debug!(url = %url, fields = form.len(), "POST request");

        let fields: Vec<(&str, &str)> = form.iter().collect();
        let response = self
            .inner
            .post(&url)
            .form(&fields)
            .send()
            .await
            .map_err(ClientError::from)?;
        Ok(into_chat_response(response))
    }
}

fn into_chat_response(response: reqwest::Response) -> ChatResponse {
    let status = response.status().as_u16();
    debug!(status, "Response received");
    ChatResponse::new(status, HttpBody { response })
}

/// Streaming body of a `reqwest` response.
pub struct HttpBody {
    response: reqwest::Response,
}

#[async_trait(?Send)]
impl BodyReader for HttpBody {
    async fn read_chunk(&mut self) -> Result<Option<Vec<u8>>, PageError> {
        let chunk = self.response.chunk().await.map_err(ClientError::from)?;
        if let Some(bytes) = &chunk {
            trace!(bytes = bytes.len(), "Body chunk");
        }
        Ok(chunk.map(|bytes| bytes.to_vec()))
    }
}
