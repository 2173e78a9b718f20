#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure byte-generation functions. Nothing here tracks terminal state; the
//! frame composer decides what to emit and when.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n m` | SGR (Select Graphic Rendition) |
//! | CSI | `ESC [ 38;5;n m` | 256-color foreground |
//! | CSI | `ESC [ 48;5;n m` | 256-color background |
//! | CSI | `ESC [ 2 J` `ESC [ H` | Clear screen and home cursor |
//! | CSI | `ESC [ ? 1049 h/l` | Alternate screen enter/leave |
//! | CSI | `ESC [ ? 25 h/l` | Cursor show/hide |

use std::io::{self, Write};

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM  = 0b0000_0010;
    }
}

// =============================================================================
// SGR (Select Graphic Rendition)
// =============================================================================

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// SGR reset as a string slice, for text splicing.
pub const SGR_RESET_STR: &str = "\x1b[0m";

/// SGR bold: `CSI 1 m`
pub const SGR_BOLD: &[u8] = b"\x1b[1m";

/// SGR dim: `CSI 2 m`
pub const SGR_DIM: &[u8] = b"\x1b[2m";

/// Ordered table of (flag, sequence) pairs for iteration.
pub const FLAG_TABLE: [(StyleFlags, &[u8]); 2] =
    [(StyleFlags::BOLD, SGR_BOLD), (StyleFlags::DIM, SGR_DIM)];

/// Write one SGR sequence per set flag, in table order.
///
/// Does not emit reset first; the caller is responsible for state.
pub fn sgr_flags<W: Write>(w: &mut W, flags: StyleFlags) -> io::Result<()> {
    for (flag, seq) in FLAG_TABLE {
        if flags.contains(flag) {
            w.write_all(seq)?;
        }
    }
    Ok(())
}

#[inline]
fn write_u8_dec(buf: &mut [u8], n: u8) -> usize {
    if n >= 100 {
        buf[0] = b'0' + n / 100;
        buf[1] = b'0' + (n / 10) % 10;
        buf[2] = b'0' + n % 10;
        3
    } else if n >= 10 {
        buf[0] = b'0' + n / 10;
        buf[1] = b'0' + n % 10;
        2
    } else {
        buf[0] = b'0' + n;
        1
    }
}

#[inline]
fn write_sgr_256<W: Write>(w: &mut W, selector: u8, index: u8) -> io::Result<()> {
    // ESC [ 3|4 8 ; 5 ; nnn m
    let mut buf = [0u8; 12];
    buf[..2].copy_from_slice(b"\x1b[");
    buf[2] = selector;
    buf[3..7].copy_from_slice(b"8;5;");
    let len = write_u8_dec(&mut buf[7..], index);
    buf[7 + len] = b'm';
    w.write_all(&buf[..7 + len + 1])
}

/// Write SGR sequence for 256-color foreground: `CSI 38;5;n m`
pub fn sgr_fg_256<W: Write>(w: &mut W, index: u8) -> io::Result<()> {
    write_sgr_256(w, b'3', index)
}

/// Write SGR sequence for 256-color background: `CSI 48;5;n m`
pub fn sgr_bg_256<W: Write>(w: &mut W, index: u8) -> io::Result<()> {
    write_sgr_256(w, b'4', index)
}

// =============================================================================
// Screen and cursor
// =============================================================================

/// Clear the display and home the cursor: `CSI 2 J` `CSI H`
pub const CLEAR_HOME: &[u8] = b"\x1b[2J\x1b[H";

/// Enter the alternate screen: `CSI ? 1049 h`
pub const ALT_SCREEN_ENTER: &[u8] = b"\x1b[?1049h";

/// Leave the alternate screen: `CSI ? 1049 l`
pub const ALT_SCREEN_LEAVE: &[u8] = b"\x1b[?1049l";

/// Hide cursor: `CSI ? 25 l`
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";

/// Show cursor: `CSI ? 25 h`
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";

#[cfg(test)]
mod tests {
    use super::*;

    fn to_bytes<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> Vec<u8> {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        buf
    }

    #[test]
    fn fg_256_all_digit_lengths() {
        assert_eq!(to_bytes(|w| sgr_fg_256(w, 0)), b"\x1b[38;5;0m");
        assert_eq!(to_bytes(|w| sgr_fg_256(w, 42)), b"\x1b[38;5;42m");
        assert_eq!(to_bytes(|w| sgr_fg_256(w, 183)), b"\x1b[38;5;183m");
        assert_eq!(to_bytes(|w| sgr_fg_256(w, 255)), b"\x1b[38;5;255m");
    }

    #[test]
    fn bg_256() {
        assert_eq!(to_bytes(|w| sgr_bg_256(w, 237)), b"\x1b[48;5;237m");
        assert_eq!(to_bytes(|w| sgr_bg_256(w, 7)), b"\x1b[48;5;7m");
    }

    #[test]
    fn flags_emit_in_table_order() {
        assert_eq!(to_bytes(|w| sgr_flags(w, StyleFlags::empty())), b"");
        assert_eq!(to_bytes(|w| sgr_flags(w, StyleFlags::BOLD)), b"\x1b[1m");
        assert_eq!(to_bytes(|w| sgr_flags(w, StyleFlags::DIM)), b"\x1b[2m");
        assert_eq!(
            to_bytes(|w| sgr_flags(w, StyleFlags::DIM | StyleFlags::BOLD)),
            b"\x1b[1m\x1b[2m"
        );
    }

    #[test]
    fn reset_constants_agree() {
        assert_eq!(SGR_RESET_STR.as_bytes(), SGR_RESET);
    }

    #[test]
    fn write_u8_dec_matches_format() {
        for n in 0..=u8::MAX {
            let mut buf = [0u8; 3];
            let len = write_u8_dec(&mut buf, n);
            assert_eq!(&buf[..len], n.to_string().as_bytes());
        }
    }
}
