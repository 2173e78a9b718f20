#![forbid(unsafe_code)]

//! Timed escape disambiguation.
//!
//! Decodes a raw byte stream into [`KeyEvent`] values without a terminfo
//! database. The only ambiguity is the escape byte: it is either a lone
//! Escape press or the first byte of a multi-byte sequence such as an arrow
//! key. The decoder resolves it purely by timing.
//!
//! # Design
//!
//! 1. Block for one byte. Anything other than `ESC` is returned directly.
//! 2. After `ESC`, wait up to [`DecoderConfig::escape_timeout`] for a second
//!    byte. Nothing arrives: lone Escape.
//! 3. Otherwise wait up to [`DecoderConfig::sequence_timeout`] for a third
//!    byte. It arrives: the three bytes collapse into [`KeyCode::Unmapped`].
//!    It does not: lone Escape, and the consumed second byte is dropped.
//!
//! The two waits are separate and each default to 100ms. Slow links can still
//! split a sequence; there is no timing-free way to tell the cases apart.
//!
//! # Failure Modes
//!
//! - End of input on the blocking read surfaces as `Ok(None)`.
//! - Errors or end of input during either follow-up wait degrade to a lone
//!   Escape instead of failing the read.

#[cfg(any(test, feature = "test-helpers"))]
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::event::{ESC, KeyCode, KeyEvent};

/// Default wait for the byte following `ESC`.
pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(100);

/// Default wait for the third byte of an escape sequence.
pub const DEFAULT_SEQUENCE_TIMEOUT: Duration = Duration::from_millis(100);

/// A source of raw input bytes.
///
/// Implemented by the tty reader and by the scripted source used in tests.
pub trait ByteSource {
    /// Block until one byte is available.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Wait at most `timeout` for one byte.
    ///
    /// Returns `Ok(None)` when the wait expires or input has ended.
    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }

    fn read_byte_timeout(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        (**self).read_byte_timeout(timeout)
    }
}

/// Timing configuration for escape disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How long to wait for the byte after `ESC`.
    pub escape_timeout: Duration,
    /// How long to wait for the byte after that.
    pub sequence_timeout: Duration,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            escape_timeout: DEFAULT_ESCAPE_TIMEOUT,
            sequence_timeout: DEFAULT_SEQUENCE_TIMEOUT,
        }
    }
}

/// Byte-to-key decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyDecoder {
    config: DecoderConfig,
}

impl KeyDecoder {
    /// Create a decoder with the given timing.
    #[must_use]
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// The decoder's timing configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Read the next key from `source`.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Propagates errors from the initial blocking read only.
    pub fn read_key<S: ByteSource + ?Sized>(&self, source: &mut S) -> io::Result<Option<KeyEvent>> {
        let Some(byte) = source.read_byte()? else {
            return Ok(None);
        };
        if byte != ESC {
            return Ok(Some(KeyEvent::from_byte(byte)));
        }

        if !Self::follow_up(source, self.config.escape_timeout) {
            return Ok(Some(KeyEvent::new(KeyCode::Escape)));
        }
        if !Self::follow_up(source, self.config.sequence_timeout) {
            crate::trace!("escape sequence truncated after two bytes");
            return Ok(Some(KeyEvent::new(KeyCode::Escape)));
        }
        Ok(Some(KeyEvent::new(KeyCode::Unmapped)))
    }

    /// Whether a byte arrived within `timeout`. The byte itself is discarded.
    fn follow_up<S: ByteSource + ?Sized>(source: &mut S, timeout: Duration) -> bool {
        match source.read_byte_timeout(timeout) {
            Ok(Some(_)) => true,
            Ok(None) => false,
            Err(_err) => {
                crate::debug!(error = %_err, "follow-up read failed, treating as lone escape");
                false
            }
        }
    }
}

/// One step of a scripted input stream.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// A byte that is immediately available.
    Byte(u8),
    /// A gap longer than any decoder timeout.
    Pause,
}

/// Deterministic [`ByteSource`] for tests.
///
/// Bytes are available immediately. A [`ScriptStep::Pause`] makes the next
/// timed read expire; blocking reads skip over pauses. An exhausted script is
/// end of input.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    steps: VecDeque<ScriptStep>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl ScriptedSource {
    /// Create an empty script (immediate end of input).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A script of back-to-back bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new().bytes(bytes)
    }

    /// Append bytes that arrive together.
    #[must_use]
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.steps.extend(bytes.iter().copied().map(ScriptStep::Byte));
        self
    }

    /// Append a gap that outlasts the decoder timeouts.
    #[must_use]
    pub fn pause(mut self) -> Self {
        self.steps.push_back(ScriptStep::Pause);
        self
    }

    /// Append keys typed one at a time, each followed by a pause.
    #[must_use]
    pub fn keys(mut self, keys: &[u8]) -> Self {
        for &byte in keys {
            self = self.bytes(&[byte]).pause();
        }
        self
    }

    /// Number of steps not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl ByteSource for ScriptedSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        while let Some(step) = self.steps.pop_front() {
            if let ScriptStep::Byte(byte) = step {
                return Ok(Some(byte));
            }
        }
        Ok(None)
    }

    fn read_byte_timeout(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        match self.steps.pop_front() {
            Some(ScriptStep::Byte(byte)) => Ok(Some(byte)),
            Some(ScriptStep::Pause) | None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(mut source: ScriptedSource) -> Vec<KeyCode> {
        let decoder = KeyDecoder::default();
        let mut codes = Vec::new();
        while let Some(key) = decoder.read_key(&mut source).unwrap() {
            codes.push(key.code);
        }
        codes
    }

    /// A source whose timed reads always fail.
    struct FailingFollowUp {
        first: Option<u8>,
    }

    impl ByteSource for FailingFollowUp {
        fn read_byte(&mut self) -> io::Result<Option<u8>> {
            Ok(self.first.take())
        }

        fn read_byte_timeout(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
            Err(io::Error::other("poll failed"))
        }
    }

    #[test]
    fn plain_bytes_pass_through() {
        let codes = decode_all(ScriptedSource::from_bytes(b"jkG%"));
        assert_eq!(
            codes,
            vec![
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::Char('G'),
                KeyCode::Char('%'),
            ]
        );
    }

    #[test]
    fn lone_escape_when_nothing_follows() {
        let codes = decode_all(ScriptedSource::new().bytes(&[ESC]).pause().bytes(b"q"));
        assert_eq!(codes, vec![KeyCode::Escape, KeyCode::Char('q')]);
    }

    #[test]
    fn escape_at_end_of_input_is_lone_escape() {
        let codes = decode_all(ScriptedSource::from_bytes(&[ESC]));
        assert_eq!(codes, vec![KeyCode::Escape]);
    }

    #[test]
    fn arrow_keys_collapse_to_unmapped() {
        let codes = decode_all(ScriptedSource::from_bytes(b"\x1b[A\x1b[B\x1b[C\x1b[D"));
        assert_eq!(codes, vec![KeyCode::Unmapped; 4]);
    }

    #[test]
    fn ss3_sequence_is_unmapped() {
        let codes = decode_all(ScriptedSource::from_bytes(b"\x1bOP"));
        assert_eq!(codes, vec![KeyCode::Unmapped]);
    }

    #[test]
    fn timeout_at_second_wait_degrades_to_escape() {
        // ESC [ then silence: the '[' is swallowed, the next key is intact.
        let codes = decode_all(ScriptedSource::new().bytes(b"\x1b[").pause().bytes(b"j"));
        assert_eq!(codes, vec![KeyCode::Escape, KeyCode::Char('j')]);
    }

    #[test]
    fn sequence_longer_than_three_bytes_leaks_tail() {
        // CSI 15~ (F5): only ESC [ 1 are consumed; "5~" decode as plain keys.
        let codes = decode_all(ScriptedSource::from_bytes(b"\x1b[15~"));
        assert_eq!(
            codes,
            vec![KeyCode::Unmapped, KeyCode::Char('5'), KeyCode::Char('~')]
        );
    }

    #[test]
    fn double_escape_typed_quickly_is_one_escape() {
        // ESC ESC x within the window reads as a single sequence.
        let codes = decode_all(ScriptedSource::from_bytes(b"\x1b\x1bx"));
        assert_eq!(codes, vec![KeyCode::Unmapped]);
    }

    #[test]
    fn follow_up_errors_degrade_to_escape() {
        let decoder = KeyDecoder::default();
        let mut source = FailingFollowUp { first: Some(ESC) };
        let key = decoder.read_key(&mut source).unwrap();
        assert_eq!(key, Some(KeyEvent::new(KeyCode::Escape)));
        assert_eq!(decoder.read_key(&mut source).unwrap(), None);
    }

    #[test]
    fn empty_source_is_end_of_input() {
        let decoder = KeyDecoder::default();
        let mut source = ScriptedSource::new();
        assert_eq!(decoder.read_key(&mut source).unwrap(), None);
    }

    #[test]
    fn blocking_read_skips_pauses() {
        let mut source = ScriptedSource::new().pause().pause().bytes(b"k");
        assert_eq!(source.read_byte().unwrap(), Some(b'k'));
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn keys_helper_separates_each_byte() {
        let codes = decode_all(ScriptedSource::new().keys(&[ESC, b'j', ESC]));
        assert_eq!(
            codes,
            vec![KeyCode::Escape, KeyCode::Char('j'), KeyCode::Escape]
        );
    }

    #[test]
    fn default_timeouts_are_100ms() {
        let config = DecoderConfig::default();
        assert_eq!(config.escape_timeout, Duration::from_millis(100));
        assert_eq!(config.sequence_timeout, Duration::from_millis(100));
        assert_eq!(KeyDecoder::default().config(), &config);
    }
}
