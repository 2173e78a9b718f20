#![forbid(unsafe_code)]

//! Per-frame output buffer.
//!
//! Every byte of a frame is appended here and handed to the backend in one
//! piece, so the screen never shows a half-drawn frame.
//!
//! # Growth
//!
//! The buffer grows on demand with [`Vec::try_reserve`]. An append that cannot
//! be satisfied (allocation failure, or the optional byte limit) is dropped
//! whole and counted; what was buffered before it is still presented. Writing
//! into the buffer therefore never fails.

use std::io::{self, Write};

/// Initial capacity of a new frame buffer.
pub const DEFAULT_CAPACITY: usize = 8192;

/// Growable byte buffer for one frame.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    bytes: Vec<u8>,
    limit: Option<usize>,
    dropped: u64,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create an empty buffer with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(DEFAULT_CAPACITY),
            limit: None,
            dropped: 0,
        }
    }

    /// Create a buffer that refuses to grow beyond `limit` bytes.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(DEFAULT_CAPACITY.min(limit)),
            limit: Some(limit),
            dropped: 0,
        }
    }

    /// Append bytes, dropping them whole if the buffer cannot grow.
    ///
    /// Returns whether the bytes were stored.
    pub fn append(&mut self, data: &[u8]) -> bool {
        if let Some(limit) = self.limit
            && self.bytes.len() + data.len() > limit
        {
            self.note_drop(data.len());
            return false;
        }
        if self.bytes.try_reserve(data.len()).is_err() {
            self.note_drop(data.len());
            return false;
        }
        self.bytes.extend_from_slice(data);
        true
    }

    /// Append a string.
    pub fn push_str(&mut self, text: &str) -> bool {
        self.append(text.as_bytes())
    }

    /// Append a string followed by a newline.
    pub fn push_line(&mut self, text: &str) {
        self.push_str(text);
        self.append(b"\n");
    }

    fn note_drop(&mut self, _len: usize) {
        self.dropped += 1;
        tutor_core::debug!(bytes = _len, "frame append dropped");
    }

    /// The buffered bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of appends dropped since the last [`clear`](Self::clear).
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Discard the buffered bytes and the drop count, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.dropped = 0;
    }
}

impl Write for FrameBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Dropped appends are reported as written so `write!` never fails.
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_empty() {
        let frame = FrameBuffer::new();
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
        assert_eq!(frame.dropped(), 0);
    }

    #[test]
    fn appends_accumulate() {
        let mut frame = FrameBuffer::new();
        frame.push_str("ab");
        frame.push_line("cd");
        write!(frame, "{}", 42).unwrap();
        assert_eq!(frame.as_bytes(), b"abcd\n42");
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut frame = FrameBuffer::new();
        let chunk = [b'x'; 1000];
        for _ in 0..20 {
            assert!(frame.append(&chunk));
        }
        assert_eq!(frame.len(), 20_000);
        assert_eq!(frame.dropped(), 0);
    }

    #[test]
    fn limit_drops_whole_append() {
        let mut frame = FrameBuffer::with_limit(8);
        assert!(frame.push_str("12345"));
        assert!(!frame.push_str("6789"));
        assert!(frame.push_str("678"));
        assert_eq!(frame.as_bytes(), b"12345678");
        assert_eq!(frame.dropped(), 1);
    }

    #[test]
    fn write_trait_never_fails_on_drop() {
        let mut frame = FrameBuffer::with_limit(4);
        assert!(write!(frame, "too long").is_ok());
        assert!(frame.is_empty());
        assert_eq!(frame.dropped(), 1);
    }

    #[test]
    fn truncated_frame_keeps_earlier_appends() {
        let mut frame = FrameBuffer::with_limit(6);
        frame.push_str("abc");
        frame.push_str("defghi");
        frame.push_str("de");
        assert_eq!(frame.as_bytes(), b"abcde");
    }

    #[test]
    fn clear_starts_a_fresh_frame() {
        let mut frame = FrameBuffer::with_limit(4);
        frame.push_str("abc");
        frame.push_str("de");
        assert_eq!(frame.dropped(), 1);

        frame.clear();
        assert!(frame.is_empty());
        assert_eq!(frame.dropped(), 0);

        assert!(frame.push_str("abcd"));
        assert_eq!(frame.dropped(), 0);
    }
}
