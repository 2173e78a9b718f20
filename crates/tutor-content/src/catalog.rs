#![forbid(unsafe_code)]

//! The content catalog: labelled sections in menu order.
//!
//! Catalogs are bundled as JSON:
//!
//! ```json
//! {
//!   "name": "zshtutor",
//!   "banner": ["  ZSH"],
//!   "tagline": "zsh · fzf",
//!   "key_width": 22,
//!   "sections": [
//!     { "label": "History", "lines": ["T:HISTORY", "R:Ctrl+r|search"] }
//!   ]
//! }
//! ```
//!
//! `banner`, `tagline`, `key_width`, `menu_legend`, `section_legend` and
//! `farewell` are optional; absent values fall back to the program defaults.

use std::fmt;

use serde::Deserialize;

use crate::line::Section;

/// Serialized catalog document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    name: String,
    #[serde(default)]
    banner: Vec<String>,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    key_width: Option<usize>,
    #[serde(default)]
    menu_legend: Option<String>,
    #[serde(default)]
    section_legend: Option<String>,
    #[serde(default)]
    farewell: Option<String>,
    sections: Vec<SectionFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionFile {
    label: String,
    lines: Vec<String>,
}

/// Errors from loading a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The document is not valid catalog JSON.
    Json(serde_json::Error),
    /// The catalog has no sections.
    Empty,
    /// A section label is empty or whitespace.
    EmptyLabel {
        /// Position of the offending section.
        index: usize,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid catalog: {e}"),
            Self::Empty => write!(f, "catalog has no sections"),
            Self::EmptyLabel { index } => write!(f, "section {} has an empty label", index + 1),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Empty | Self::EmptyLabel { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Menu label.
    pub label: String,
    /// Section content.
    pub section: Section,
}

impl CatalogEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(label: impl Into<String>, section: Section) -> Self {
        Self {
            label: label.into(),
            section,
        }
    }
}

/// Ordered, immutable set of labelled sections plus presentation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: String,
    banner: Vec<String>,
    tagline: Option<String>,
    key_width: Option<usize>,
    menu_legend: Option<String>,
    section_legend: Option<String>,
    farewell: Option<String>,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries, with no presentation overrides.
    ///
    /// # Errors
    ///
    /// Fails when `entries` is empty or a label is blank.
    pub fn new(name: impl Into<String>, entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        validate(&entries)?;
        Ok(Self {
            name: name.into(),
            banner: Vec::new(),
            tagline: None,
            key_width: None,
            menu_legend: None,
            section_legend: None,
            farewell: None,
            entries,
        })
    }

    /// Parse a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, unknown fields, an empty section list or a
    /// blank label.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let entries: Vec<CatalogEntry> = file
            .sections
            .into_iter()
            .map(|s| CatalogEntry::new(s.label, Section::parse(s.lines)))
            .collect();
        validate(&entries)?;
        Ok(Self {
            name: file.name,
            banner: file.banner,
            tagline: file.tagline,
            key_width: file.key_width,
            menu_legend: file.menu_legend,
            section_legend: file.section_legend,
            farewell: file.farewell,
            entries,
        })
    }

    /// Set the banner lines.
    #[must_use]
    pub fn with_banner(mut self, banner: Vec<String>) -> Self {
        self.banner = banner;
        self
    }

    /// Set the tagline.
    #[must_use]
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Set the key column width.
    #[must_use]
    pub fn with_key_width(mut self, width: usize) -> Self {
        self.key_width = Some(width);
        self
    }

    /// Program name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Banner lines shown above the menu.
    #[must_use]
    pub fn banner(&self) -> &[String] {
        &self.banner
    }

    /// Tagline under the banner.
    #[must_use]
    pub fn tagline(&self) -> Option<&str> {
        self.tagline.as_deref()
    }

    /// Key column width override.
    #[must_use]
    pub fn key_width(&self) -> Option<usize> {
        self.key_width
    }

    /// Menu legend override.
    #[must_use]
    pub fn menu_legend(&self) -> Option<&str> {
        self.menu_legend.as_deref()
    }

    /// Section legend override.
    #[must_use]
    pub fn section_legend(&self) -> Option<&str> {
        self.section_legend.as_deref()
    }

    /// Farewell override.
    #[must_use]
    pub fn farewell(&self) -> Option<&str> {
        self.farewell.as_deref()
    }

    /// All entries in menu order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Number of sections. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }
    if let Some(index) = entries.iter().position(|e| e.label.trim().is_empty()) {
        return Err(CatalogError::EmptyLabel { index });
    }
    Ok(())
}
