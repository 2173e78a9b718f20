#![forbid(unsafe_code)]

//! Style values: an optional foreground, an optional background and attribute
//! flags.
//!
//! Sequences are emitted background first, then foreground, then one
//! sequence per attribute. A style never emits a reset of its own; callers
//! close painted spans with [`SGR_RESET`](tutor_render::ansi::SGR_RESET).

use std::io::{self, Write};

use tutor_render::StyleFlags;
use tutor_render::ansi::{self, SGR_RESET_STR};

use crate::color::Ansi256;

/// A combination of colors and attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Ansi256>,
    /// Background color.
    pub bg: Option<Ansi256>,
    /// Text attributes.
    pub attrs: StyleFlags,
}

impl Style {
    /// An empty style that emits nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground palette index.
    #[must_use]
    pub const fn fg(mut self, index: u8) -> Self {
        self.fg = Some(Ansi256(index));
        self
    }

    /// Set the background palette index.
    #[must_use]
    pub const fn bg(mut self, index: u8) -> Self {
        self.bg = Some(Ansi256(index));
        self
    }

    /// Add bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::BOLD);
        self
    }

    /// Add dim.
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.attrs = self.attrs.union(StyleFlags::DIM);
        self
    }

    /// Replace the attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Whether the style sets nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Write the SGR sequences that turn this style on.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        let mut w = w;
        if let Some(bg) = self.bg {
            ansi::sgr_bg_256(&mut w, bg.index())?;
        }
        if let Some(fg) = self.fg {
            ansi::sgr_fg_256(&mut w, fg.index())?;
        }
        ansi::sgr_flags(&mut w, self.attrs)
    }

    /// Append the SGR sequences for this style to `out`.
    pub fn push_sgr(&self, out: &mut String) {
        let mut bytes = Vec::with_capacity(24);
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut bytes);
        out.push_str(&String::from_utf8_lossy(&bytes));
    }

    /// The SGR sequences for this style as a string.
    #[must_use]
    pub fn sgr(&self) -> String {
        let mut out = String::new();
        self.push_sgr(&mut out);
        out
    }

    /// `text` wrapped in this style and a trailing reset.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        let mut out = self.sgr();
        out.push_str(text);
        out.push_str(SGR_RESET_STR);
        out
    }
}
