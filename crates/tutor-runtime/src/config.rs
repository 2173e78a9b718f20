#![forbid(unsafe_code)]

//! Program configuration.
//!
//! Defaults match the bundled catalogs. A catalog may override the key column
//! width, both legends and the farewell line; everything else comes from
//! [`ProgramConfig::default`].

use tutor_content::Catalog;
use tutor_content::markup::DEFAULT_KEY_WIDTH;
use tutor_core::backend::{FALLBACK_ROWS, MIN_ROWS};
use tutor_core::input_parser::DecoderConfig;
use tutor_style::Theme;

/// Default menu legend.
pub const DEFAULT_MENU_LEGEND: &str = "j/k выбор   l/Enter открыть   % край↔край   q выход";

/// Default section legend.
pub const DEFAULT_SECTION_LEGEND: &str = "j/k↕  gg начало  G конец  % край↔край  x/h выход";

/// Default farewell line.
pub const DEFAULT_FAREWELL: &str = "bye";

/// Rows below the viewport: the rule, the status row and one spare line.
pub const FOOTER_ROWS: u16 = 3;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramConfig {
    /// Key column width in display cells.
    pub key_width: usize,
    /// Escape disambiguation timing.
    pub decoder: DecoderConfig,
    /// Height assumed when the terminal reports less than `min_rows`.
    pub fallback_rows: u16,
    /// Smallest reported height taken at face value.
    pub min_rows: u16,
    /// Legend under the menu.
    pub menu_legend: String,
    /// Legend under a section.
    pub section_legend: String,
    /// Line printed after a normal quit.
    pub farewell: String,
    /// Color roles.
    pub theme: Theme,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            key_width: DEFAULT_KEY_WIDTH,
            decoder: DecoderConfig::default(),
            fallback_rows: FALLBACK_ROWS,
            min_rows: MIN_ROWS,
            menu_legend: DEFAULT_MENU_LEGEND.to_owned(),
            section_legend: DEFAULT_SECTION_LEGEND.to_owned(),
            farewell: DEFAULT_FAREWELL.to_owned(),
            theme: Theme::default(),
        }
    }
}

impl ProgramConfig {
    /// Defaults with the catalog's overrides applied.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let mut config = Self::default();
        if let Some(width) = catalog.key_width() {
            config.key_width = width;
        }
        if let Some(legend) = catalog.menu_legend() {
            config.menu_legend = legend.to_owned();
        }
        if let Some(legend) = catalog.section_legend() {
            config.section_legend = legend.to_owned();
        }
        if let Some(farewell) = catalog.farewell() {
            config.farewell = farewell.to_owned();
        }
        config
    }

    /// Set the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Usable terminal height for a reported height.
    #[must_use]
    pub fn effective_rows(&self, reported: u16) -> u16 {
        if reported >= self.min_rows {
            reported
        } else {
            self.fallback_rows
        }
    }

    /// Section viewport height for a reported terminal height. At least 1.
    #[must_use]
    pub fn section_visible(&self, reported: u16) -> usize {
        usize::from(self.effective_rows(reported).saturating_sub(FOOTER_ROWS)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tutor_content::{CatalogEntry, Section};

    #[test]
    fn defaults() {
        let config = ProgramConfig::default();
        assert_eq!(config.key_width, 22);
        assert_eq!(config.decoder.escape_timeout, Duration::from_millis(100));
        assert_eq!(config.decoder.sequence_timeout, Duration::from_millis(100));
        assert_eq!(config.fallback_rows, 24);
        assert_eq!(config.min_rows, 5);
        assert_eq!(config.farewell, "bye");
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn catalog_overrides() {
        let json = r#"{
            "name": "t",
            "key_width": 18,
            "menu_legend": "m",
            "farewell": "ciao",
            "sections": [{ "label": "a", "lines": [] }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        let config = ProgramConfig::for_catalog(&catalog);
        assert_eq!(config.key_width, 18);
        assert_eq!(config.menu_legend, "m");
        assert_eq!(config.section_legend, DEFAULT_SECTION_LEGEND);
        assert_eq!(config.farewell, "ciao");
    }

    #[test]
    fn catalog_without_overrides_uses_defaults() {
        let catalog = Catalog::new("t", vec![CatalogEntry::new("a", Section::default())]).unwrap();
        assert_eq!(ProgramConfig::for_catalog(&catalog), ProgramConfig::default());
    }

    #[test]
    fn effective_rows_falls_back() {
        let config = ProgramConfig::default();
        assert_eq!(config.effective_rows(0), 24);
        assert_eq!(config.effective_rows(4), 24);
        assert_eq!(config.effective_rows(5), 5);
        assert_eq!(config.effective_rows(60), 60);
    }

    #[test]
    fn section_visible_rows() {
        let config = ProgramConfig::default();
        assert_eq!(config.section_visible(24), 21);
        assert_eq!(config.section_visible(5), 2);
        assert_eq!(config.section_visible(0), 21);
        let tiny = ProgramConfig {
            min_rows: 1,
            ..ProgramConfig::default()
        };
        assert_eq!(tiny.section_visible(2), 1);
    }
}
