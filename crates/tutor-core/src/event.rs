#![forbid(unsafe_code)]

//! Canonical key event types.
//!
//! Input is decoded byte-at-a-time, so events map directly onto what the
//! terminal sent: a single byte, a lone Escape, or a collapsed escape
//! sequence.
//!
//! # Design Notes
//!
//! - Bytes at or above `0x80` are reported as [`KeyCode::Byte`]; UTF-8 is not
//!   reassembled because no binding uses non-ASCII input.
//! - CR and LF both decode to [`KeyCode::Enter`].
//! - Every escape sequence collapses into [`KeyCode::Unmapped`]. Arrow keys
//!   land here and are intentionally not bound to anything.

/// The escape byte (`0x1B`).
pub const ESC: u8 = 0x1B;

/// Logical key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable ASCII (`0x20..=0x7E`).
    Char(char),

    /// Enter/Return (CR or LF).
    Enter,

    /// A lone Escape press.
    Escape,

    /// Any other C0 control byte, or DEL.
    Control(u8),

    /// A byte outside the ASCII range.
    Byte(u8),

    /// An escape sequence (Escape followed by two more bytes).
    Unmapped,
}

impl KeyCode {
    /// Classify a single non-escape byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            b'\r' | b'\n' => Self::Enter,
            ESC => Self::Escape,
            0x20..=0x7E => Self::Char(byte as char),
            0x00..=0x1F | 0x7F => Self::Control(byte),
            _ => Self::Byte(byte),
        }
    }
}

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
}

impl KeyEvent {
    /// Create a key event from a key code.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self { code }
    }

    /// Create a key event for a printable character.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Create a key event from a single raw byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self::new(KeyCode::from_byte(byte))
    }

    /// The ASCII digit `1..=9` carried by this event, if any.
    #[must_use]
    pub fn digit(&self) -> Option<u8> {
        match self.code {
            KeyCode::Char(c @ '1'..='9') => Some(c as u8 - b'0'),
            _ => None,
        }
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_is_char() {
        assert_eq!(KeyCode::from_byte(b'j'), KeyCode::Char('j'));
        assert_eq!(KeyCode::from_byte(b' '), KeyCode::Char(' '));
        assert_eq!(KeyCode::from_byte(b'~'), KeyCode::Char('~'));
        assert_eq!(KeyCode::from_byte(b'%'), KeyCode::Char('%'));
    }

    #[test]
    fn carriage_return_and_line_feed_are_enter() {
        assert_eq!(KeyCode::from_byte(b'\r'), KeyCode::Enter);
        assert_eq!(KeyCode::from_byte(b'\n'), KeyCode::Enter);
    }

    #[test]
    fn control_bytes() {
        assert_eq!(KeyCode::from_byte(0x03), KeyCode::Control(0x03));
        assert_eq!(KeyCode::from_byte(0x7F), KeyCode::Control(0x7F));
        assert_eq!(KeyCode::from_byte(b'\t'), KeyCode::Control(b'\t'));
    }

    #[test]
    fn high_bytes_are_raw() {
        assert_eq!(KeyCode::from_byte(0xD0), KeyCode::Byte(0xD0));
        assert_eq!(KeyCode::from_byte(0xFF), KeyCode::Byte(0xFF));
    }

    #[test]
    fn digit_only_for_one_through_nine() {
        assert_eq!(KeyEvent::char('1').digit(), Some(1));
        assert_eq!(KeyEvent::char('9').digit(), Some(9));
        assert_eq!(KeyEvent::char('0').digit(), None);
        assert_eq!(KeyEvent::char('a').digit(), None);
        assert_eq!(KeyEvent::new(KeyCode::Enter).digit(), None);
    }
}
