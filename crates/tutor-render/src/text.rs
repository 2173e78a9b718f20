#![forbid(unsafe_code)]

//! Display-width helpers for column alignment.

use unicode_width::UnicodeWidthStr;

/// Calculate the display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Append `text` to `out`, then spaces up to `width` display cells.
///
/// Text already at or beyond `width` is appended unchanged, never truncated.
pub fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    let used = display_width(text);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
}
