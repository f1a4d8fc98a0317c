//! Newline-delimited JSON framing for the chat stream.
//!
//! Chunks from the response body are not aligned to lines. [`LineBuffer`]
//! keeps only the trailing incomplete line between chunks and hands back the
//! lines completed by each new chunk.

use crate::error::PageError;
use crate::message::Message;

/// Incremental line splitter over raw body bytes.
///
/// Splitting happens on the `\n` byte before UTF-8 decoding, so a multibyte
/// character cut in half by a chunk boundary is decoded once it is whole.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return every line it completed, without the
    /// terminating newline.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        // Pending bytes never hold a newline, so only the new chunk is scanned.
        let start = self.pending.len();
        self.pending.extend_from_slice(chunk);

        let Some(last_newline) = self.pending[start..]
            .iter()
            .rposition(|b| *b == b'\n')
            .map(|pos| start + pos)
        else {
            return Vec::new();
        };

        let rest = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, rest);

        complete[..last_newline]
            .split(|b| *b == b'\n')
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }

    /// Drain the trailing line that never saw a newline.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.pending);
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    /// Bytes held back waiting for a newline.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Whether a line is too short to carry a message (blank or keep-alive).
///
/// Length is counted in UTF-16 code units, the way the browser measures
/// strings: a single emoji is two units and is not filler.
pub fn is_filler(line: &str) -> bool {
    line.encode_utf16().nth(1).is_none()
}

/// Parse one line. Returns `None` for filler lines.
pub fn parse_line(line: &str) -> Option<Result<Message, PageError>> {
    if is_filler(line) {
        return None;
    }
    Some(
        serde_json::from_str::<Message>(line).map_err(|source| PageError::MalformedLine {
            line: line.to_string(),
            source,
        }),
    )
}

/// Parse every message in a complete body.
///
/// Stops at the first malformed line.
pub fn parse_messages(text: &str) -> Result<Vec<Message>, PageError> {
    text.split('\n').filter_map(parse_line).collect()
}
