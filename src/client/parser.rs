//! Incremental parser for streaming API records.
//!
//! A streaming response is a never-ending body of records:
//!
//! ```text
//! event: update
//! data: {"id":"103704874086360371", ...}
//!
//! :thump
//! event: delete
//! data: 103704874086360371
//!
//! ```
//!
//! Bytes arrive in arbitrary chunks, so a record may be split anywhere,
//! including inside a multi-byte character. The parser keeps whatever it
//! cannot use yet and picks up from there on the next call.
//!
//! # Parsing Flow
//!
//! 1. Append the new bytes to the pending tail
//! 2. Find the next `event:` marker
//! 3. Find the blank line (`\n\n`) terminating that record
//! 4. Extract the type and the `data:` payload, repeat from 2
//! 5. Keep the unterminated remainder
//!
//! Lines outside a record, such as `:thump` heartbeats, are dropped once a
//! newline shows they are complete.
//!
//! # Examples
//!
//! ```
//! use masto_http::client::parser::EventParser;
//! use masto_http::EventKind;
//!
//! let mut parser = EventParser::new();
//! let events = parser.feed(b"event: delete\ndata: 42\n\nevent: upd");
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].kind, EventKind::Delete);
//! assert_eq!(events[0].data, "42");
//!
//! let events = parser.feed(b"ate\ndata: {}\n\n");
//! assert_eq!(events[0].kind, EventKind::Update);
//! ```

use crate::types::{Event, EventKind};
use bytes::{Buf, BytesMut};

const EVENT_MARKER: &[u8] = b"event:";
const DATA_MARKER: &[u8] = b"data:";
const TERMINATOR: &[u8] = b"\n\n";

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Strip the optional single space after a field marker and any `\r`.
fn field_value(raw: &[u8]) -> String {
    let raw = raw.strip_prefix(b" ").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Length of the prefix of `bytes` that does not end inside a UTF-8 sequence.
fn complete_utf8_len(bytes: &[u8]) -> usize {
    let len = bytes.len();
    for back in 1..=len.min(4) {
        let byte = bytes[len - back];
        if byte & 0b1100_0000 == 0b1000_0000 {
            continue;
        }
        let width = match byte {
            b if b & 0b1000_0000 == 0 => 1,
            b if b & 0b1110_0000 == 0b1100_0000 => 2,
            b if b & 0b1111_0000 == 0b1110_0000 => 3,
            b if b & 0b1111_1000 == 0b1111_0000 => 4,
            _ => 1,
        };
        return if width > back { len - back } else { len };
    }
    len
}

/// Parser state for one streaming response.
///
/// Owned by a [`Session`](crate::Session) next to its shared buffer. The
/// session copies bytes out of the buffer under the buffer lock and feeds
/// them here afterwards, so parsing never blocks the network side.
#[derive(Debug, Default)]
pub struct EventParser {
    /// Bytes not yet forming a complete record.
    pending: BytesMut,
    /// Trailing bytes of a character split across chunks.
    partial_char: BytesMut,
}

impl EventParser {
    /// Create an empty parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything held back. Called when a new transfer starts.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.partial_char.clear();
    }

    /// Bytes held back for the next [`EventParser::feed`].
    pub fn remaining(&self) -> &[u8] {
        &self.pending
    }

    /// Append `data` and return every record completed by it, in order.
    pub fn feed(&mut self, data: &[u8]) -> Vec<Event> {
        self.pending.extend_from_slice(data);
        let mut events = Vec::new();

        loop {
            let Some(start) = find(&self.pending, EVENT_MARKER) else {
                self.drop_complete_lines();
                break;
            };
            let body = start + EVENT_MARKER.len();
            let Some(end) = find(&self.pending[body..], TERMINATOR).map(|pos| body + pos) else {
                self.pending.advance(start);
                break;
            };

            let record = &self.pending[body..end];
            let (kind_line, rest) = match find(record, b"\n") {
                Some(newline) => (&record[..newline], &record[newline + 1..]),
                None => (record, &record[record.len()..]),
            };
            let kind = field_value(kind_line);
            let data = match find(rest, DATA_MARKER) {
                Some(pos) => field_value(&rest[pos + DATA_MARKER.len()..]),
                None => String::new(),
            };

            tracing::trace!("Stream event: {} ({} bytes)", kind, data.len());
            events.push(Event {
                kind: EventKind::from(kind.as_str()),
                data,
            });
            self.pending.advance(end + TERMINATOR.len());
        }

        events
    }

    /// Turn `data` into text, holding back an incomplete trailing character.
    pub fn take_text(&mut self, data: &[u8]) -> String {
        self.partial_char.extend_from_slice(data);
        let complete = complete_utf8_len(&self.partial_char);
        let text = self.partial_char.split_to(complete);
        String::from_utf8_lossy(&text).into_owned()
    }

    fn drop_complete_lines(&mut self) {
        // A marker may be split across chunks, so keep the last partial line.
        if let Some(newline) = self.pending.iter().rposition(|&b| b == b'\n') {
            self.pending.advance(newline + 1);
        }
    }
}
