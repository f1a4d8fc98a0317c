//! Fetch transport for the chat endpoint.

mod streaming;

pub use streaming::*;
