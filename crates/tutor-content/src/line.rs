#![forbid(unsafe_code)]

//! Tagged content lines.
//!
//! Content is stored as strings of the form `<tag>:<payload>`:
//!
//! | Tag | Meaning |
//! |-----|---------|
//! | `T` | Title banner |
//! | `G` | Group heading |
//! | `R` | Row: `key|description` |
//! | `N` | Note |
//! | `B` | Blank spacer (payload ignored) |
//!
//! Parsing never fails. Anything else, including a known tag letter not
//! followed by `:`, becomes [`ContentLine::Raw`] and is shown verbatim.

use std::fmt;

/// One typed line of section content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine {
    /// Banner framed by rules.
    Title(String),
    /// Sub-heading.
    GroupHeader(String),
    /// Key binding and its description.
    Row {
        /// Text before the first `|`.
        key: String,
        /// Text after the first `|`; empty when there is no `|`.
        description: String,
    },
    /// Dimmed annotation.
    Note(String),
    /// Empty spacer.
    Blank,
    /// Unrecognised line, kept whole.
    Raw(String),
}

impl ContentLine {
    /// Parse one serialized line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let mut chars = line.chars();
        let (Some(tag), Some(':')) = (chars.next(), chars.next()) else {
            return Self::Raw(line.to_owned());
        };
        let payload = chars.as_str();
        match tag {
            'T' => Self::Title(payload.to_owned()),
            'G' => Self::GroupHeader(payload.to_owned()),
            'R' => Self::row(payload),
            'N' => Self::Note(payload.to_owned()),
            'B' => Self::Blank,
            _ => Self::Raw(line.to_owned()),
        }
    }

    /// Split a row payload on its first `|`.
    #[must_use]
    pub fn row(payload: &str) -> Self {
        let (key, description) = payload.split_once('|').unwrap_or((payload, ""));
        Self::Row {
            key: key.to_owned(),
            description: description.to_owned(),
        }
    }

    /// The tag letter for this line, or `None` for raw lines.
    #[must_use]
    pub const fn tag(&self) -> Option<char> {
        match self {
            Self::Title(_) => Some('T'),
            Self::GroupHeader(_) => Some('G'),
            Self::Row { .. } => Some('R'),
            Self::Note(_) => Some('N'),
            Self::Blank => Some('B'),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for ContentLine {
    /// Serialized form. Lines produced by [`ContentLine::parse`] parse back unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(text) => write!(f, "T:{text}"),
            Self::GroupHeader(text) => write!(f, "G:{text}"),
            Self::Row { key, description } if description.is_empty() && !key.contains('|') => {
                write!(f, "R:{key}")
            }
            Self::Row { key, description } => write!(f, "R:{key}|{description}"),
            Self::Note(text) => write!(f, "N:{text}"),
            Self::Blank => f.write_str("B:"),
            Self::Raw(line) => f.write_str(line),
        }
    }
}

impl From<&str> for ContentLine {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

/// An ordered, immutable run of content lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    lines: Vec<ContentLine>,
}

impl Section {
    /// Create a section from typed lines.
    #[must_use]
    pub fn new(lines: Vec<ContentLine>) -> Self {
        Self { lines }
    }

    /// Parse every serialized line.
    pub fn parse<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            lines
                .into_iter()
                .map(|line| ContentLine::parse(line.as_ref()))
                .collect(),
        )
    }

    /// The lines in order.
    #[must_use]
    pub fn lines(&self) -> &[ContentLine] {
        &self.lines
    }

    /// Iterate the lines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentLine> {
        self.lines.iter()
    }

    /// Number of content lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the section has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a ContentLine;
    type IntoIter = std::slice::Iter<'a, ContentLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
