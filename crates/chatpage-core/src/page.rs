//! The page contract the controller renders into.
//!
//! A `Page` owns the conversation container, the prompt input, the spinner
//! and the error banner. The browser implements it over the DOM; the
//! terminal and the tests use [`MemoryPage`].

mod memory;

pub use memory::{MemoryPage, RenderedElement};

use crate::message::{FormFields, Message, MessageId};

/// A new message element about to be appended to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageElement {
    pub id: MessageId,
    pub classes: Vec<String>,
    pub title: String,
}

/// UI surface driven by the page controller.
///
/// All methods take `&self`; implementations own whatever interior
/// mutability they need. The controller runs on a single thread.
pub trait Page {
    /// Toggle the busy indicator.
    fn set_spinner_active(&self, active: bool);

    /// Reveal the error banner.
    fn show_error(&self);

    /// Enable or disable the prompt input.
    fn set_prompt_enabled(&self, enabled: bool);

    /// Clear the prompt input.
    fn clear_prompt(&self);

    /// Move input focus to the prompt.
    fn focus_prompt(&self);

    /// Snapshot the form fields for a submission.
    fn capture_form(&self) -> FormFields;

    /// Whether the conversation already holds an element with this id.
    fn has_message(&self, id: &MessageId) -> bool;

    /// Append a new, empty message element as the last child of the
    /// conversation.
    fn append_message(&self, element: &MessageElement);

    /// Replace the inner markup of an existing message element.
    fn set_message_html(&self, id: &MessageId, message: &Message, html: &str);

    /// Smoothly scroll to the bottom of the page.
    fn scroll_to_bottom(&self);

    /// Emit a diagnostic line to the page's console, if it has one.
    fn log_diagnostic(&self, _message: &str) {}
}
