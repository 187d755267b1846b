//! Response buffers shared between the transfer task and the caller.

use bytes::{Bytes, BytesMut};
use parking_lot::Mutex;

/// Body bytes written by the transfer task and drained by the caller.
///
/// The lock is only held to append a chunk or to move the whole buffer out;
/// parsing always happens on the copied bytes.
#[derive(Debug, Default)]
pub(crate) struct StreamBuffer {
    body: Mutex<BytesMut>,
    headers: Mutex<String>,
}

impl StreamBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&self, chunk: &[u8]) {
        self.body.lock().extend_from_slice(chunk);
    }

    /// Move everything received so far out of the buffer.
    pub(crate) fn take(&self) -> Bytes {
        self.body.lock().split().freeze()
    }

    /// Copy of the buffered body, leaving it in place.
    pub(crate) fn body_snapshot(&self) -> String {
        let copy = self.body.lock().clone();
        String::from_utf8_lossy(&copy).into_owned()
    }

    pub(crate) fn set_headers(&self, block: String) {
        *self.headers.lock() = block;
    }

    pub(crate) fn headers(&self) -> String {
        self.headers.lock().clone()
    }

    pub(crate) fn clear(&self) {
        self.body.lock().clear();
        self.headers.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_empties_buffer() {
        let buffer = StreamBuffer::new();
        buffer.append(b"event: update\n");
        buffer.append(b"data: {}\n\n");
        assert_eq!(&buffer.take()[..], b"event: update\ndata: {}\n\n");
        assert!(buffer.take().is_empty());
    }

    #[test]
    fn test_snapshot_keeps_contents() {
        let buffer = StreamBuffer::new();
        buffer.append(b"OK");
        assert_eq!(buffer.body_snapshot(), "OK");
        assert_eq!(buffer.body_snapshot(), "OK");
        buffer.clear();
        assert_eq!(buffer.body_snapshot(), "");
    }
}
