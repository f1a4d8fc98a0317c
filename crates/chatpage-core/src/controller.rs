//! Page controller: request lifecycle, streaming and error surfacing.

use tracing::{debug, error, info, warn};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::ndjson::LineBuffer;
use crate::page::Page;
use crate::render::MessageRenderer;
use crate::transport::{ChatResponse, Transport};

/// Drives a [`Page`] from responses of the chat endpoint.
///
/// Every public flow routes its failure through [`PageController::on_error`]
/// before returning it, so callers may ignore the result.
pub struct PageController<P, T> {
    page: P,
    transport: T,
    renderer: MessageRenderer,
    config: PageConfig,
}

impl<P: Page, T: Transport> PageController<P, T> {
    /// Create a controller over a validated page.
    pub fn new(page: P, transport: T, config: PageConfig) -> Self {
        Self {
            page,
            transport,
            renderer: MessageRenderer::new(config.clone()),
            config,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Fetch and render the existing conversation.
    pub async fn load_history(&self) -> Result<(), PageError> {
        info!(endpoint = %self.config.endpoint, "Loading conversation history");

        let result = async {
            let response = self.transport.get(&self.config.endpoint).await?;
            self.on_response(response).await
        }
        .await;

        self.finish(result)
    }

    /// Submit the prompt form and stream the reply.
    ///
    /// The prompt stays disabled until the stream completes; after a failure
    /// it stays disabled.
    pub async fn submit(&self) -> Result<(), PageError> {
        self.page.set_spinner_active(true);
        let form = self.page.capture_form();

        self.page.clear_prompt();
        self.page.set_prompt_enabled(false);

        if form.is_empty() {
            warn!(endpoint = %self.config.endpoint, "Submitting a form with no fields");
        }
        info!(
            endpoint = %self.config.endpoint,
            fields = form.len(),
            "Submitting prompt"
        );

        let result = async {
            let response = self.transport.post_form(&self.config.endpoint, &form).await?;
            self.on_response(response).await
        }
        .await;

        self.finish(result)
    }

    /// Stream a response into the page.
    ///
    /// Fails with [`PageError::UnexpectedResponse`] on a non-2xx status or a
    /// missing body. Does not call the error handler itself.
    pub async fn on_response(&self, response: ChatResponse) -> Result<(), PageError> {
        if !response.is_ok() {
            return Err(self.unexpected(response).await);
        }

        let ChatResponse { status, body } = response;
        let Some(mut body) = body else {
            return Err(self.unexpected(ChatResponse::without_body(status)).await);
        };

        let mut lines = LineBuffer::new();
        let mut chunks = 0u64;

        while let Some(chunk) = body.read_chunk().await? {
            chunks += 1;
            let completed = lines.push(&chunk);
            self.renderer.render_lines(&self.page, &completed)?;
            self.page.set_spinner_active(false);
        }

        let tail: Vec<String> = lines.finish().into_iter().collect();
        self.renderer.render_lines(&self.page, &tail)?;
        self.page.set_spinner_active(false);

        self.page.set_prompt_enabled(true);
        self.page.focus_prompt();

        debug!(status, chunks, "Response stream complete");
        Ok(())
    }

    /// Surface a failure: log it, show the banner, stop the spinner.
    pub fn on_error(&self, err: &PageError) {
        error!(error = %err, "Chat request failed");
        self.page.log_diagnostic(&err.to_string());
        self.page.show_error();
        self.page.set_spinner_active(false);
    }

    fn finish(&self, result: Result<(), PageError>) -> Result<(), PageError> {
        if let Err(err) = &result {
            self.on_error(err);
        }
        result
    }

    async fn unexpected(&self, response: ChatResponse) -> PageError {
        let status = response.status;
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return err,
        };

        warn!(status, body = %body, "Unexpected response");
        self.page
            .log_diagnostic(&format!("Unexpected response: {} {}", status, body));

        PageError::UnexpectedResponse { status, body }
    }
}
