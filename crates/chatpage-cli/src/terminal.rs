//! Terminal rendition of the chat page.
//!
//! Messages are written as they stream. A message gets a `[title]` header
//! the first time it is written; later updates that only extend the text
//! print the new suffix, anything else reprints the message.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::Write;

use chatpage_core::{FormFields, Message, MessageElement, MessageId, Page};
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct Printed {
    titles: HashMap<MessageId, String>,
    text: HashMap<MessageId, String>,
    last: Option<MessageId>,
    /// Whether the cursor sits at the start of a line.
    at_line_start: bool,
}

/// [`Page`] that writes the conversation to a terminal.
pub struct TerminalPage<W: Write> {
    out: RefCell<W>,
    html: bool,
    printed: RefCell<Printed>,
    prompt_value: RefCell<String>,
    spinner_active: Cell<bool>,
    interactive: bool,
}

impl<W: Write> TerminalPage<W> {
    /// Create a page over a writer.
    ///
    /// With `html` set the rendered markup is printed instead of the raw
    /// markdown. `interactive` prints a `> ` prompt whenever input is
    /// focused.
    pub fn new(out: W, html: bool, interactive: bool) -> Self {
        Self {
            out: RefCell::new(out),
            html,
            printed: RefCell::new(Printed {
                at_line_start: true,
                ..Printed::default()
            }),
            prompt_value: RefCell::new(String::new()),
            spinner_active: Cell::new(false),
            interactive,
        }
    }

    /// Set the text the next submission sends.
    pub fn set_prompt_value(&self, value: impl Into<String>) {
        *self.prompt_value.borrow_mut() = value.into();
    }

    /// Consume the page and return its writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        let mut out = self.out.borrow_mut();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
            return;
        }
        self.printed.borrow_mut().at_line_start = text.ends_with('\n');
    }

    fn end_line(&self) {
        if !self.printed.borrow().at_line_start {
            self.write("\n");
        }
    }
}

impl<W: Write> Page for TerminalPage<W> {
    fn set_spinner_active(&self, active: bool) {
        if self.spinner_active.replace(active) != active {
            debug!(active, "Spinner");
        }
    }

    fn show_error(&self) {
        self.end_line();
    }

    fn set_prompt_enabled(&self, enabled: bool) {
        debug!(enabled, "Prompt");
    }

    fn clear_prompt(&self) {
        self.prompt_value.borrow_mut().clear();
    }

    fn focus_prompt(&self) {
        self.end_line();
        if self.interactive {
            self.write("> ");
        }
    }

    fn capture_form(&self) -> FormFields {
        FormFields::prompt(self.prompt_value.borrow().clone())
    }

    fn has_message(&self, id: &MessageId) -> bool {
        self.printed.borrow().titles.contains_key(id)
    }

    fn append_message(&self, element: &MessageElement) {
        let mut printed = self.printed.borrow_mut();
        printed.titles.insert(element.id.clone(), element.title.clone());
        printed.text.insert(element.id.clone(), String::new());
    }

    fn set_message_html(&self, id: &MessageId, message: &Message, html: &str) {
        let text = if self.html { html } else { message.content.as_str() };

        let (previous, title, is_last) = {
            let printed = self.printed.borrow();
            (
                printed.text.get(id).cloned().unwrap_or_default(),
                printed.titles.get(id).cloned().unwrap_or_else(|| message.title()),
                printed.last.as_ref() == Some(id),
            )
        };

        if is_last && text == previous {
            return;
        }

        match text.strip_prefix(previous.as_str()) {
            Some(suffix) if is_last => self.write(suffix),
            _ => {
                self.end_line();
                self.write(&format!("[{}]\n", title));
                self.write(text);
            }
        }

        let mut printed = self.printed.borrow_mut();
        printed.text.insert(id.clone(), text.to_string());
        printed.last = Some(id.clone());
    }

    fn scroll_to_bottom(&self) {}

    fn log_diagnostic(&self, message: &str) {
        self.end_line();
        eprintln!("error: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpage_core::{MessageRenderer, PageConfig};

    fn output(page: TerminalPage<Vec<u8>>) -> String {
        String::from_utf8(page.into_inner()).unwrap()
    }

    #[test]
    fn test_streamed_content_prints_suffix() {
        let page = TerminalPage::new(Vec::new(), false, false);
        let renderer = MessageRenderer::new(PageConfig::default());

        renderer.render_message(&page, &Message::new("assistant", "Hel", "t1"));
        renderer.render_message(&page, &Message::new("assistant", "Hello", "t1"));
        renderer.render_message(&page, &Message::new("assistant", "Hello!", "t1"));

        assert_eq!(output(page), "[assistant at t1]\nHello!");
    }

    #[test]
    fn test_rewritten_content_reprints() {
        let page = TerminalPage::new(Vec::new(), false, false);
        let renderer = MessageRenderer::new(PageConfig::default());

        renderer.render_message(&page, &Message::new("assistant", "draft", "t1"));
        renderer.render_message(&page, &Message::new("assistant", "final", "t1"));

        assert_eq!(
            output(page),
            "[assistant at t1]\ndraft\n[assistant at t1]\nfinal"
        );
    }

    #[test]
    fn test_repeated_message_printed_once() {
        let page = TerminalPage::new(Vec::new(), false, false);
        let renderer = MessageRenderer::new(PageConfig::default());

        let msg = Message::new("user", "hi\n", "t1");
        renderer.render_message(&page, &msg);
        renderer.render_message(&page, &msg);
        page.focus_prompt();

        assert_eq!(output(page), "[user at t1]\nhi\n");
    }

    #[test]
    fn test_html_mode_and_interactive_prompt() {
        let page = TerminalPage::new(Vec::new(), true, true);
        let renderer = MessageRenderer::new(PageConfig::default());

        renderer.render_message(&page, &Message::new("user", "hi", "t1"));
        page.focus_prompt();

        assert_eq!(output(page), "[user at t1]\n<p>hi</p>\n> ");
    }

    #[test]
    fn test_capture_form_uses_prompt_value() {
        let page = TerminalPage::new(Vec::new(), false, false);
        page.set_prompt_value("hello");
        assert_eq!(page.capture_form().get("prompt"), Some("hello"));
        page.clear_prompt();
        assert_eq!(page.capture_form().get("prompt"), Some(""));
    }
}
