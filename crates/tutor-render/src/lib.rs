#![forbid(unsafe_code)]

//! Render kernel: ANSI byte generation, the per-frame output buffer, and
//! display-width helpers.

pub mod ansi;
pub mod frame;
pub mod text;

pub use ansi::StyleFlags;
pub use frame::FrameBuffer;
