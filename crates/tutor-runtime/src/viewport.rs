#![forbid(unsafe_code)]

//! Viewport and scroll engine.
//!
//! # Invariants
//!
//! For a list of `total` rows and a viewport of `visible >= 1` rows, after
//! [`ViewState::follow`]:
//!
//! 1. `cursor < total` whenever `total > 0`, and `cursor == 0` otherwise.
//! 2. `offset <= cursor < offset + visible`.
//!
//! Motions clamp; nothing wraps around.

use std::ops::Range;

use tutor_content::DisplayLine;
use tutor_content::markup::{INDENT, rule};
use tutor_render::FrameBuffer;
use tutor_render::ansi::SGR_RESET_STR;
use tutor_style::{Style, Theme};

/// A cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// One row down.
    Down,
    /// One row up.
    Up,
    /// First row.
    Top,
    /// Last row.
    Bottom,
    /// Last row from the upper half, first row from the lower half.
    ToggleEnds,
}

/// Cursor and scroll position over a list of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    cursor: usize,
    offset: usize,
    total: usize,
}

impl ViewState {
    /// Start at the first row.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            total,
        }
    }

    /// Highlighted row.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible row.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Number of rows.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    fn last(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// Move the cursor.
    pub fn apply(&mut self, motion: Motion) {
        match motion {
            Motion::Down => {
                if self.cursor < self.last() {
                    self.cursor += 1;
                }
            }
            Motion::Up => self.cursor = self.cursor.saturating_sub(1),
            Motion::Top => {
                self.cursor = 0;
                self.offset = 0;
            }
            Motion::Bottom => self.cursor = self.last(),
            Motion::ToggleEnds => {
                self.cursor = if self.cursor < self.total / 2 {
                    self.last()
                } else {
                    0
                };
            }
        }
    }

    /// Put the cursor on `index`, clamped to the last row.
    pub fn select(&mut self, index: usize) {
        self.cursor = index.min(self.last());
    }

    /// Scroll so the cursor is inside a viewport of `visible` rows.
    pub fn follow(&mut self, visible: usize) {
        let visible = visible.max(1);
        self.cursor = self.cursor.min(self.last());
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        if self.cursor >= self.offset + visible {
            self.offset = self.cursor + 1 - visible;
        }
    }

    /// Rows shown in a viewport of `visible` rows.
    #[must_use]
    pub fn window(&self, visible: usize) -> Range<usize> {
        let start = self.offset.min(self.total);
        start..self.offset.saturating_add(visible.max(1)).min(self.total)
    }

    /// One-based cursor position for the status row; zero for an empty list.
    #[must_use]
    pub const fn position(&self) -> usize {
        if self.total == 0 { 0 } else { self.cursor + 1 }
    }
}

/// `line` drawn in the cursor style.
///
/// Every reset inside the line re-applies the cursor style so the highlight
/// spans the whole row.
#[must_use]
pub fn highlight(line: &str, cursor: &Style) -> String {
    let sgr = cursor.sgr();
    let mut out = String::with_capacity(line.len() + sgr.len() * 4);
    out.push_str(&sgr);
    let mut rest = line;
    while let Some(at) = rest.find(SGR_RESET_STR) {
        let end = at + SGR_RESET_STR.len();
        out.push_str(&rest[..end]);
        out.push_str(&sgr);
        rest = &rest[end..];
    }
    out.push_str(rest);
    out.push_str(SGR_RESET_STR);
    out
}

/// Draw the visible rows, one call to `draw_row` per row.
///
/// `draw_row` gets the row index and whether it is under the cursor. The
/// state should already have been through [`ViewState::follow`].
pub fn render_window<F>(frame: &mut FrameBuffer, state: &ViewState, visible: usize, mut draw_row: F)
where
    F: FnMut(&mut FrameBuffer, usize, bool),
{
    for index in state.window(visible) {
        draw_row(frame, index, index == state.cursor());
        frame.append(b"\n");
    }
}

/// Draw precompiled display lines, highlighting the cursor row.
pub fn render_lines(
    frame: &mut FrameBuffer,
    state: &ViewState,
    visible: usize,
    lines: &[DisplayLine],
    theme: &Theme,
) {
    render_window(frame, state, visible, |frame, index, selected| {
        let Some(line) = lines.get(index) else {
            return;
        };
        if selected {
            frame.push_str(&highlight(line, &theme.cursor));
        } else {
            frame.push_str(line);
        }
    });
}

/// Draw the rule and the status row.
pub fn render_footer(frame: &mut FrameBuffer, state: &ViewState, legend: &str, theme: &Theme) {
    frame.push_line(&rule(theme));
    let mut status = theme.hint.sgr();
    status.push_str(INDENT);
    status.push_str(legend);
    theme.separator.push_sgr(&mut status);
    status.push_str(&format!("{INDENT}[{}/{}]", state.position(), state.total()));
    status.push_str(SGR_RESET_STR);
    frame.push_line(&status);
}
