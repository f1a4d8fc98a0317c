//! Chat message types carried on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single chat message as streamed by the chat endpoint.
///
/// The timestamp doubles as the message identity: sending the same
/// timestamp again updates the existing rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author role, e.g. `user` or `assistant`. Also used as a CSS class.
    pub role: String,
    /// Markdown content.
    pub content: String,
    /// Unique, stable message identifier.
    pub timestamp: String,
}

impl Message {
    /// Create a new message.
    pub fn new(
        role: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Element id derived from the timestamp.
    pub fn id(&self) -> MessageId {
        MessageId::for_timestamp(&self.timestamp)
    }

    /// Human readable title, `"{role} at {timestamp}"`.
    pub fn title(&self) -> String {
        format!("{} at {}", self.role, self.timestamp)
    }
}

/// Element id of a rendered message (`msg-{timestamp}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Prefix shared by all message element ids.
    pub const PREFIX: &'static str = "msg-";

    /// Derive the id for a message timestamp.
    pub fn for_timestamp(timestamp: &str) -> Self {
        Self(format!("{}{}", Self::PREFIX, timestamp))
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered `(name, value)` pairs captured from the prompt form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Field name of the prompt input.
    pub const PROMPT: &'static str = "prompt";

    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form holding only a prompt.
    pub fn prompt(value: impl Into<String>) -> Self {
        Self::new().with(Self::PROMPT, value)
    }

    /// Append a field.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a field in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// First value for a field name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Whether the form carried no named fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
