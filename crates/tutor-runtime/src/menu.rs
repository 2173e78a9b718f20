#![forbid(unsafe_code)]

//! Main menu rendering.
//!
//! Layout, top to bottom: a blank line, the banner, the optional tagline, a
//! rule, the section labels (scrolled like any other list), then the common
//! footer.

use tutor_content::Catalog;
use tutor_content::markup::{INDENT, rule};
use tutor_render::FrameBuffer;
use tutor_render::ansi::SGR_RESET_STR;
use tutor_style::Theme;

use crate::config::FOOTER_ROWS;
use crate::viewport::{ViewState, render_window};

/// Marker in front of the highlighted label.
pub const SELECTED_MARKER: &str = "▶";

/// Rows taken by the header above the labels.
#[must_use]
pub fn header_rows(catalog: &Catalog) -> usize {
    1 + catalog.banner().len() + usize::from(catalog.tagline().is_some()) + 1
}

/// Label viewport height for a usable terminal height. At least 1.
#[must_use]
pub fn visible_rows(catalog: &Catalog, rows: u16) -> usize {
    usize::from(rows)
        .saturating_sub(header_rows(catalog) + usize::from(FOOTER_ROWS))
        .max(1)
}

/// Draw the banner, tagline and rule.
pub fn render_header(frame: &mut FrameBuffer, catalog: &Catalog, theme: &Theme) {
    frame.push_str(&theme.title.bold().sgr());
    frame.append(b"\n");
    for line in catalog.banner() {
        frame.push_line(line);
    }
    frame.push_str(SGR_RESET_STR);
    if let Some(tagline) = catalog.tagline() {
        frame.push_line(&theme.hint.dim().paint(&format!("{INDENT}{tagline}")));
    }
    frame.push_line(&rule(theme));
}

/// One menu row.
///
/// The highlighted row shows the marker in the bold cursor style; the others
/// show their one-based number in the key color.
#[must_use]
pub fn label_row(index: usize, label: &str, selected: bool, theme: &Theme) -> String {
    if selected {
        theme
            .cursor
            .bold()
            .paint(&format!("{INDENT}{SELECTED_MARKER}{INDENT}{label}"))
    } else {
        let mut row = theme.key.sgr();
        row.push_str(&format!("{INDENT}[{}]", index + 1));
        theme.description.push_sgr(&mut row);
        row.push_str(INDENT);
        row.push_str(label);
        row.push_str(SGR_RESET_STR);
        row
    }
}

/// Draw the header and the visible labels.
pub fn render_menu(
    frame: &mut FrameBuffer,
    catalog: &Catalog,
    state: &ViewState,
    visible: usize,
    theme: &Theme,
) {
    render_header(frame, catalog, theme);
    render_window(frame, state, visible, |frame, index, selected| {
        if let Some(entry) = catalog.get(index) {
            frame.push_str(&label_row(index, &entry.label, selected, theme));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_content::{CatalogEntry, Section};

    fn catalog(n: usize) -> Catalog {
        let entries = (0..n)
            .map(|i| CatalogEntry::new(format!("Label {i}"), Section::default()))
            .collect();
        Catalog::new("demo", entries).unwrap()
    }

    fn text(frame: &FrameBuffer) -> String {
        String::from_utf8(frame.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn header_rows_count_every_part() {
        let bare = catalog(3);
        assert_eq!(header_rows(&bare), 2);
        let full = catalog(3)
            .with_banner(vec!["  A".into(), "  B".into()])
            .with_tagline("tag");
        assert_eq!(header_rows(&full), 5);
    }

    #[test]
    fn visible_rows_leave_room_for_header_and_footer() {
        let full = catalog(3).with_banner(vec!["  A".into(); 6]).with_tagline("t");
        assert_eq!(header_rows(&full), 9);
        assert_eq!(visible_rows(&full, 24), 12);
        assert_eq!(visible_rows(&full, 5), 1);
    }

    #[test]
    fn selected_row() {
        let theme = Theme::default();
        assert_eq!(
            label_row(0, "History", true, &theme),
            "\x1b[48;5;237m\x1b[38;5;255m\x1b[1m  ▶  History\x1b[0m"
        );
    }

    #[test]
    fn unselected_row_is_numbered_from_one() {
        let theme = Theme::default();
        assert_eq!(
            label_row(2, "Aliases", false, &theme),
            "\x1b[38;5;183m  [3]\x1b[38;5;252m  Aliases\x1b[0m"
        );
    }

    #[test]
    fn header_layout() {
        let theme = Theme::default();
        let catalog = catalog(1).with_banner(vec!["  BANNER".into()]).with_tagline("tag");
        let mut frame = FrameBuffer::new();
        render_header(&mut frame, &catalog, &theme);
        let text = text(&frame);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), header_rows(&catalog));
        assert_eq!(lines[0], "\x1b[38;5;111m\x1b[1m");
        assert_eq!(lines[1], "  BANNER");
        assert_eq!(lines[2], "\x1b[0m\x1b[38;5;109m\x1b[2m  tag\x1b[0m");
        assert_eq!(lines[3], rule(&theme));
    }

    #[test]
    fn menu_scrolls_long_catalogs() {
        let theme = Theme::default();
        let catalog = catalog(13);
        let mut state = ViewState::new(13);
        state.select(12);
        state.follow(4);
        let mut frame = FrameBuffer::new();
        render_menu(&mut frame, &catalog, &state, 4, &theme);
        let text = text(&frame);
        assert!(text.contains("[10]"));
        assert!(!text.contains("[9]"));
        assert!(text.contains("▶  Label 12"));
    }
}
