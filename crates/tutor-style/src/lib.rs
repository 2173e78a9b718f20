#![forbid(unsafe_code)]

//! Style types for the tutor viewer.
//!
//! This crate provides:
//! - [`Ansi256`] palette indices
//! - [`Style`] for foreground, background and attribute combinations
//! - [`Theme`] for the semantic roles used by the markup compiler and menu

/// 256-color palette indices.
pub mod color;
/// Style values and SGR emission.
pub mod style;
/// Semantic color roles.
pub mod theme;

pub use color::Ansi256;
pub use style::Style;
pub use theme::{Theme, ThemeBuilder};
pub use tutor_render::StyleFlags;
