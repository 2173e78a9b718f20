#![forbid(unsafe_code)]

//! Key bindings for the menu and section views.
//!
//! Both views share one list vocabulary:
//!
//! | Key | Action |
//! |-----|--------|
//! | `j` / `k` | down / up one row |
//! | `g` `g` | first row |
//! | `G` | last row |
//! | `%` | toggle between the ends |
//!
//! On top of that the menu opens sections (`l`, Enter, `1`-`9`) and quits
//! (`q`, `x`); a section returns to the menu on `x`, `h`, `q` or Escape.
//! Every other key, including collapsed escape sequences, does nothing
//! except cancel a pending `g`.

use tutor_core::event::{KeyCode, KeyEvent};
use tutor_core::key_sequence::{KeySequenceAction, KeySequenceInterpreter};

use crate::viewport::{Motion, ViewState};

/// What the menu wants after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Stay in the menu.
    None,
    /// Enter the section at this index.
    Open(usize),
    /// Leave the program.
    Quit,
}

/// What a section view wants after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAction {
    /// Stay in the section.
    None,
    /// Return to the menu.
    Exit,
}

/// A [`ViewState`] plus the pending `g` of the `gg` chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNavigator {
    state: ViewState,
    chord: KeySequenceInterpreter,
}

impl ListNavigator {
    /// A navigator over `total` rows, at the first row.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            state: ViewState::new(total),
            chord: KeySequenceInterpreter::new(KeyCode::Char('g')),
        }
    }

    /// Current cursor and scroll position.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Mutable access for scroll-follow and selection.
    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Whether a lone `g` is waiting for its partner.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.chord.is_armed()
    }

    /// Drop a pending `g`.
    pub fn clear_pending(&mut self) {
        self.chord.reset();
    }

    /// Apply the shared list bindings.
    ///
    /// Returns the key when it is not a list binding, so the caller can
    /// interpret it.
    pub fn handle(&mut self, key: &KeyEvent) -> Option<KeyEvent> {
        let key = match self.chord.feed(key) {
            KeySequenceAction::Pending => return None,
            KeySequenceAction::Complete => {
                self.state.apply(Motion::Top);
                return None;
            }
            KeySequenceAction::Emit(key) => key,
        };
        let motion = match key.code {
            KeyCode::Char('j') => Motion::Down,
            KeyCode::Char('k') => Motion::Up,
            KeyCode::Char('G') => Motion::Bottom,
            KeyCode::Char('%') => Motion::ToggleEnds,
            _ => return Some(key),
        };
        self.state.apply(motion);
        None
    }

    /// Interpret a key in the menu.
    pub fn menu_key(&mut self, key: &KeyEvent) -> MenuAction {
        let Some(key) = self.handle(key) else {
            return MenuAction::None;
        };
        if let Some(digit) = key.digit() {
            let index = usize::from(digit) - 1;
            if index < self.state.total() {
                self.state.select(index);
                return MenuAction::Open(index);
            }
            return MenuAction::None;
        }
        match key.code {
            KeyCode::Char('l') | KeyCode::Enter if self.state.total() > 0 => {
                MenuAction::Open(self.state.cursor())
            }
            KeyCode::Char('q' | 'x') => MenuAction::Quit,
            _ => MenuAction::None,
        }
    }

    /// Interpret a key in a section view.
    pub fn section_key(&mut self, key: &KeyEvent) -> SectionAction {
        let Some(key) = self.handle(key) else {
            return SectionAction::None;
        };
        match key.code {
            KeyCode::Char('x' | 'h' | 'q') | KeyCode::Escape => SectionAction::Exit,
            _ => SectionAction::None,
        }
    }
}
