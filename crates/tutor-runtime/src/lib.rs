#![forbid(unsafe_code)]

//! Runtime for the tutor viewer.
//!
//! The program loop renders a frame, blocks for one key, updates state and
//! repeats. State lives in [`App`]; the loop drives any
//! [`Backend`](tutor_core::backend::Backend).

pub mod config;
pub mod menu;
pub mod navigation;
pub mod program;
pub mod viewport;

pub use config::ProgramConfig;
pub use navigation::{ListNavigator, MenuAction, SectionAction};
pub use program::{App, Cmd, ExitReason, Mode, Program};
pub use viewport::{Motion, ViewState};
