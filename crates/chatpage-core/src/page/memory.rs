//! In-memory page used by the terminal front-end and by tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::message::{FormFields, Message, MessageId};
use crate::page::{MessageElement, Page};

/// A message element as held by [`MemoryPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    pub id: MessageId,
    pub classes: Vec<String>,
    pub title: String,
    /// Current inner markup.
    pub html: String,
    /// Markdown source of the current markup.
    pub content: String,
    /// Number of times the markup was set.
    pub renders: usize,
}

#[derive(Debug)]
struct State {
    spinner_active: bool,
    error_visible: bool,
    prompt_enabled: bool,
    prompt_value: String,
    focus_count: usize,
    scroll_count: usize,
    elements: Vec<RenderedElement>,
    diagnostics: Vec<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            spinner_active: false,
            error_visible: false,
            prompt_enabled: true,
            prompt_value: String::new(),
            focus_count: 0,
            scroll_count: 0,
            elements: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

/// Page state kept in memory.
///
/// Starts with the spinner inactive, the banner hidden and the prompt
/// enabled, matching a freshly loaded page. Clones share the same state.
#[derive(Debug, Default, Clone)]
pub struct MemoryPage {
    state: Rc<RefCell<State>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type into the prompt input.
    pub fn set_prompt_value(&self, value: impl Into<String>) {
        self.state.borrow_mut().prompt_value = value.into();
    }

    pub fn prompt_value(&self) -> String {
        self.state.borrow().prompt_value.clone()
    }

    pub fn spinner_active(&self) -> bool {
        self.state.borrow().spinner_active
    }

    pub fn error_visible(&self) -> bool {
        self.state.borrow().error_visible
    }

    pub fn prompt_enabled(&self) -> bool {
        self.state.borrow().prompt_enabled
    }

    /// How many times the prompt received focus.
    pub fn focus_count(&self) -> usize {
        self.state.borrow().focus_count
    }

    /// How many scroll requests were made.
    pub fn scroll_count(&self) -> usize {
        self.state.borrow().scroll_count
    }

    /// Conversation elements in document order.
    pub fn elements(&self) -> Vec<RenderedElement> {
        self.state.borrow().elements.clone()
    }

    /// Look up one element by id.
    pub fn element(&self, id: &str) -> Option<RenderedElement> {
        self.state
            .borrow()
            .elements
            .iter()
            .find(|e| e.id.as_str() == id)
            .cloned()
    }

    /// Diagnostic lines logged through the page.
    pub fn diagnostics(&self) -> Vec<String> {
        self.state.borrow().diagnostics.clone()
    }
}

impl Page for MemoryPage {
    fn set_spinner_active(&self, active: bool) {
        self.state.borrow_mut().spinner_active = active;
    }

    fn show_error(&self) {
        self.state.borrow_mut().error_visible = true;
    }

    fn set_prompt_enabled(&self, enabled: bool) {
        self.state.borrow_mut().prompt_enabled = enabled;
    }

    fn clear_prompt(&self) {
        self.state.borrow_mut().prompt_value.clear();
    }

    fn focus_prompt(&self) {
        self.state.borrow_mut().focus_count += 1;
    }

    fn capture_form(&self) -> FormFields {
        FormFields::prompt(self.state.borrow().prompt_value.clone())
    }

    fn has_message(&self, id: &MessageId) -> bool {
        self.state.borrow().elements.iter().any(|e| &e.id == id)
    }

    fn append_message(&self, element: &MessageElement) {
        self.state.borrow_mut().elements.push(RenderedElement {
            id: element.id.clone(),
            classes: element.classes.clone(),
            title: element.title.clone(),
            html: String::new(),
            content: String::new(),
            renders: 0,
        });
    }

    fn set_message_html(&self, id: &MessageId, message: &Message, html: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(element) = state.elements.iter_mut().find(|e| &e.id == id) {
            element.html = html.to_string();
            element.content = message.content.clone();
            element.renders += 1;
        }
    }

    fn scroll_to_bottom(&self) {
        self.state.borrow_mut().scroll_count += 1;
    }

    fn log_diagnostic(&self, message: &str) {
        self.state.borrow_mut().diagnostics.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_page_state() {
        let page = MemoryPage::new();
        assert!(!page.spinner_active());
        assert!(!page.error_visible());
        assert!(page.prompt_enabled());
        assert!(page.elements().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let page = MemoryPage::new();
        let view = page.clone();
        page.set_spinner_active(true);
        assert!(view.spinner_active());
    }

    #[test]
    fn test_capture_form_reads_prompt() {
        let page = MemoryPage::new();
        page.set_prompt_value("what's up");
        assert_eq!(page.capture_form().get(FormFields::PROMPT), Some("what's up"));
        page.clear_prompt();
        assert_eq!(page.prompt_value(), "");
    }
}
