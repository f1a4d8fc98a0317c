//! Native HTTP transport for the chat page controller.
//!
//! Streams the chat endpoint's newline-delimited JSON with `reqwest`,
//! handing each received chunk to the controller as it arrives.

pub mod error;
pub mod http;

pub use error::ClientError;
pub use http::{HttpBody, HttpTransport};
