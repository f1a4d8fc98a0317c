//! chatpage core
//!
//! Everything the chat page does that is not DOM or network specific:
//! - wire types for the newline-delimited JSON stream
//! - incremental line framing
//! - message rendering with one element per timestamp
//! - the page controller and its `Page` / `Transport` seams
//! - startup validation of the page's required elements
//!
//! The browser front-end and the terminal client both build on this crate.

pub mod config;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod markdown;
pub mod message;
pub mod ndjson;
pub mod page;
pub mod render;
pub mod transport;

// Re-export commonly used types
pub use config::{DomSelectors, MalformedLinePolicy, PageConfig};
pub use controller::PageController;
pub use error::PageError;
pub use lookup::{ElementLookup, PageElements};
pub use markdown::render_markdown;
pub use message::{FormFields, Message, MessageId};
pub use ndjson::{parse_messages, LineBuffer};
pub use page::{MemoryPage, MessageElement, Page, RenderedElement};
pub use render::MessageRenderer;
pub use transport::{BodyReader, ChatResponse, MemoryBody, Transport};
