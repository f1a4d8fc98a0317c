//! Rendering parsed messages into a page.

use tracing::{trace, warn};

use crate::config::{MalformedLinePolicy, PageConfig};
use crate::error::PageError;
use crate::markdown::render_markdown;
use crate::message::Message;
use crate::ndjson::parse_line;
use crate::page::{MessageElement, Page};

/// Turns stream lines into message elements, one element per timestamp.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    config: PageConfig,
}

impl MessageRenderer {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Parse and render a batch of lines, then scroll to the bottom.
    ///
    /// Under [`MalformedLinePolicy::Abort`] a bad line fails the whole pass
    /// before anything from it is rendered. Returns the number of messages
    /// rendered.
    pub fn render_lines<P, S>(&self, page: &P, lines: &[S]) -> Result<usize, PageError>
    where
        P: Page + ?Sized,
        S: AsRef<str>,
    {
        let mut messages = Vec::with_capacity(lines.len());
        for line in lines {
            match parse_line(line.as_ref()) {
                None => {}
                Some(Ok(message)) => messages.push(message),
                Some(Err(err)) => match self.config.malformed_lines {
                    MalformedLinePolicy::Abort => return Err(err),
                    MalformedLinePolicy::Skip => {
                        let preview: String = line.as_ref().chars().take(200).collect();
                        warn!(error = %err, preview = %preview, "Skipping malformed line");
                    }
                },
            }
        }

        for message in &messages {
            self.render_message(page, message);
        }
        page.scroll_to_bottom();

        Ok(messages.len())
    }

    /// Render a complete body in one pass.
    pub fn render_text<P: Page + ?Sized>(&self, page: &P, text: &str) -> Result<usize, PageError> {
        let lines: Vec<&str> = text.split('\n').collect();
        self.render_lines(page, &lines)
    }

    /// Create the element for a message if needed and set its markup.
    ///
    /// Returns `true` when a new element was appended.
    pub fn render_message<P: Page + ?Sized>(&self, page: &P, message: &Message) -> bool {
        let id = message.id();
        let created = !page.has_message(&id);

        if created {
            trace!(id = %id, role = %message.role, "Appending message element");
            page.append_message(&MessageElement {
                id: id.clone(),
                classes: self.config.classes_for(&message.role),
                title: message.title(),
            });
        }

        page.set_message_html(&id, message, &render_markdown(&message.content));
        created
    }
}
