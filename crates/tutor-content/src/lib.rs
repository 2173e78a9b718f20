#![forbid(unsafe_code)]

//! Content model for the tutor viewer.
//!
//! - [`ContentLine`] and [`Section`]: the typed form of tagged content lines
//! - [`Catalog`]: the ordered, labelled sections shown in the menu
//! - [`MarkupCompiler`]: turns a section into colorized display lines

pub mod catalog;
pub mod line;
pub mod markup;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use line::{ContentLine, Section};
pub use markup::{DisplayLine, MarkupCompiler};
