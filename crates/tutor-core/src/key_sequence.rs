#![forbid(unsafe_code)]

//! Two-key chord detection (`g g`).
//!
//! A stateful interpreter sitting on top of the [`KeyEvent`] stream. The first
//! press of the trigger key arms it; a second consecutive press completes the
//! chord. Any other key disarms it and is passed through unchanged.
//!
//! # Design
//!
//! ## Invariants
//! 1. The interpreter is armed only directly after a lone trigger press.
//! 2. Keys that break a pending chord are never swallowed: they come back as
//!    [`KeySequenceAction::Emit`] so the caller can act on them normally.
//! 3. There is no timeout. A chord may be completed at any later time as long
//!    as nothing else was pressed in between.
//!
//! ## Failure Modes
//! - A lone trigger press has no effect of its own; the caller sees only
//!   [`KeySequenceAction::Pending`].
//!
//! # Example
//!
//! ```
//! use tutor_core::event::{KeyCode, KeyEvent};
//! use tutor_core::key_sequence::{KeySequenceAction, KeySequenceInterpreter};
//!
//! let mut interp = KeySequenceInterpreter::new(KeyCode::Char('g'));
//! let g = KeyEvent::char('g');
//!
//! assert_eq!(interp.feed(&g), KeySequenceAction::Pending);
//! assert_eq!(interp.feed(&g), KeySequenceAction::Complete);
//!
//! interp.feed(&g);
//! let j = KeyEvent::char('j');
//! assert_eq!(interp.feed(&j), KeySequenceAction::Emit(j));
//! assert!(!interp.is_armed());
//! ```

use crate::event::{KeyCode, KeyEvent};

/// Action returned by the key sequence interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySequenceAction {
    /// The trigger was pressed once; wait for the next key.
    Pending,

    /// The trigger was pressed twice in a row.
    Complete,

    /// Not part of a chord. Handle the key as usual.
    Emit(KeyEvent),
}

/// Detects a doubled trigger key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySequenceInterpreter {
    trigger: KeyCode,
    armed: bool,
}

impl KeySequenceInterpreter {
    /// Create an interpreter for the given trigger key.
    #[must_use]
    pub const fn new(trigger: KeyCode) -> Self {
        Self {
            trigger,
            armed: false,
        }
    }

    /// The key that arms and completes the chord.
    #[must_use]
    pub const fn trigger(&self) -> KeyCode {
        self.trigger
    }

    /// Whether the last key was a lone trigger press.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed a key event.
    pub fn feed(&mut self, event: &KeyEvent) -> KeySequenceAction {
        if event.code != self.trigger {
            self.armed = false;
            return KeySequenceAction::Emit(*event);
        }
        if self.armed {
            self.armed = false;
            KeySequenceAction::Complete
        } else {
            self.armed = true;
            KeySequenceAction::Pending
        }
    }

    /// Drop any pending chord.
    pub fn reset(&mut self) {
        self.armed = false;
    }
}

impl Default for KeySequenceInterpreter {
    fn default() -> Self {
        Self::new(KeyCode::Char('g'))
    }
}
