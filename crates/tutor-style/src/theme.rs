#![forbid(unsafe_code)]

//! Theme with semantic color roles.
//!
//! Every styled span the viewer draws is looked up by role, so the whole
//! palette can be swapped in one place.
//!
//! # Example
//! ```
//! use tutor_style::{Style, Theme};
//!
//! let theme = Theme::default();
//! assert_eq!(theme.key.sgr(), "\x1b[38;5;183m");
//!
//! let custom = Theme::builder().key(Style::new().fg(214)).build();
//! assert_eq!(custom.key.sgr(), "\x1b[38;5;214m");
//! ```

use crate::style::Style;

/// Semantic style roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Section titles and the menu banner.
    pub title: Style,
    /// Row keys and menu numbers.
    pub key: Style,
    /// Row descriptions and menu labels.
    pub description: Style,
    /// Group headings.
    pub heading: Style,
    /// Rules and the position counter.
    pub separator: Style,
    /// Notes, legends and the farewell line.
    pub hint: Style,
    /// The highlighted row.
    pub cursor: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::new().fg(111),
            key: Style::new().fg(183),
            description: Style::new().fg(252),
            heading: Style::new().fg(150),
            separator: Style::new().fg(240),
            hint: Style::new().fg(109),
            cursor: Style::new().bg(237).fg(255),
        }
    }
}

impl Theme {
    /// Create a new theme builder starting from the default palette.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }
}

/// Builder for custom themes.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeBuilder {
    /// Create a new builder starting from the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Start from a base theme.
    #[must_use]
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Set the title style.
    #[must_use]
    pub fn title(mut self, style: Style) -> Self {
        self.theme.title = style;
        self
    }

    /// Set the key style.
    #[must_use]
    pub fn key(mut self, style: Style) -> Self {
        self.theme.key = style;
        self
    }

    /// Set the description style.
    #[must_use]
    pub fn description(mut self, style: Style) -> Self {
        self.theme.description = style;
        self
    }

    /// Set the heading style.
    #[must_use]
    pub fn heading(mut self, style: Style) -> Self {
        self.theme.heading = style;
        self
    }

    /// Set the separator style.
    #[must_use]
    pub fn separator(mut self, style: Style) -> Self {
        self.theme.separator = style;
        self
    }

    /// Set the hint style.
    #[must_use]
    pub fn hint(mut self, style: Style) -> Self {
        self.theme.hint = style;
        self
    }

    /// Set the cursor style.
    #[must_use]
    pub fn cursor(mut self, style: Style) -> Self {
        self.theme.cursor = style;
        self
    }

    /// Build the theme.
    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.title.sgr(), "\x1b[38;5;111m");
        assert_eq!(theme.key.sgr(), "\x1b[38;5;183m");
        assert_eq!(theme.description.sgr(), "\x1b[38;5;252m");
        assert_eq!(theme.heading.sgr(), "\x1b[38;5;150m");
        assert_eq!(theme.separator.sgr(), "\x1b[38;5;240m");
        assert_eq!(theme.hint.sgr(), "\x1b[38;5;109m");
        assert_eq!(theme.cursor.sgr(), "\x1b[48;5;237m\x1b[38;5;255m");
    }

    #[test]
    fn default_roles_carry_no_attributes() {
        let theme = Theme::default();
        for style in [
            theme.title,
            theme.key,
            theme.description,
            theme.heading,
            theme.separator,
            theme.hint,
            theme.cursor,
        ] {
            assert!(style.attrs.is_empty());
        }
    }

    #[test]
    fn builder_overrides_single_role() {
        let theme = Theme::builder().hint(Style::new().fg(244)).build();
        assert_eq!(theme.hint.sgr(), "\x1b[38;5;244m");
        assert_eq!(theme.key, Theme::default().key);
    }

    #[test]
    fn builder_from_theme() {
        let base = Theme::builder().cursor(Style::new().bg(19)).build();
        let theme = ThemeBuilder::from_theme(base).title(Style::new().fg(1)).build();
        assert_eq!(theme.cursor.sgr(), "\x1b[48;5;19m");
        assert_eq!(theme.title.sgr(), "\x1b[38;5;1m");
    }
}
