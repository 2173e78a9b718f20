#![forbid(unsafe_code)]

//! Markup compiler: tagged lines to colorized display lines.
//!
//! Compilation is pure and independent of the viewport. Each content line
//! expands to a fixed number of display lines:
//!
//! | Line | Display lines |
//! |------|---------------|
//! | Title | rule, bold title, rule |
//! | GroupHeader | blank, bold `## heading` |
//! | Row | padded bold key, description |
//! | Note | dimmed `> note` |
//! | Blank | empty |
//! | Raw | the line verbatim, indented |
//!
//! Every styled span is closed with an SGR reset so lines can be highlighted
//! independently.

use tutor_render::ansi::SGR_RESET_STR;
use tutor_render::text::push_padded;
use tutor_style::Theme;

use crate::line::{ContentLine, Section};

/// One rendered, colorized screen line (no trailing newline).
pub type DisplayLine = String;

/// Base indentation of every content line.
pub const INDENT: &str = "  ";

/// Number of `━` cells in a horizontal rule.
pub const RULE_WIDTH: usize = 54;

/// Default key column width.
pub const DEFAULT_KEY_WIDTH: usize = 22;

/// A horizontal rule in the separator style.
#[must_use]
pub fn rule(theme: &Theme) -> DisplayLine {
    let mut text = String::with_capacity(INDENT.len() + RULE_WIDTH * 3);
    text.push_str(INDENT);
    text.extend(std::iter::repeat_n('━', RULE_WIDTH));
    theme.separator.paint(&text)
}

/// Compiles sections into display lines.
#[derive(Debug, Clone)]
pub struct MarkupCompiler {
    theme: Theme,
    key_width: usize,
}

impl Default for MarkupCompiler {
    fn default() -> Self {
        Self::new(Theme::default(), DEFAULT_KEY_WIDTH)
    }
}

impl MarkupCompiler {
    /// Create a compiler with a theme and key column width.
    #[must_use]
    pub fn new(theme: Theme, key_width: usize) -> Self {
        Self { theme, key_width }
    }

    /// The theme in use.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The key column width in display cells.
    #[must_use]
    pub fn key_width(&self) -> usize {
        self.key_width
    }

    /// Compile a section.
    #[must_use]
    pub fn compile(&self, section: &Section) -> Vec<DisplayLine> {
        let mut out = Vec::with_capacity(section.len() + section.len() / 4);
        self.compile_into(section, &mut out);
        out
    }

    /// Compile a section into `out`, replacing its contents.
    pub fn compile_into(&self, section: &Section, out: &mut Vec<DisplayLine>) {
        out.clear();
        for line in section {
            self.compile_line(line, out);
        }
    }

    /// Append the display lines for one content line.
    pub fn compile_line(&self, line: &ContentLine, out: &mut Vec<DisplayLine>) {
        let theme = &self.theme;
        match line {
            ContentLine::Title(text) => {
                out.push(rule(theme));
                out.push(theme.title.bold().paint(&indented(text)));
                out.push(rule(theme));
            }
            ContentLine::GroupHeader(text) => {
                out.push(String::new());
                out.push(theme.heading.bold().paint(&format!("{INDENT}## {text}")));
            }
            ContentLine::Row { key, description } => {
                out.push(self.row(key, description));
            }
            ContentLine::Note(text) => {
                out.push(theme.hint.dim().paint(&format!("{INDENT}> {text}")));
            }
            ContentLine::Blank => out.push(String::new()),
            ContentLine::Raw(line) => out.push(indented(line)),
        }
    }

    fn row(&self, key: &str, description: &str) -> DisplayLine {
        let mut out = String::with_capacity(64 + key.len() + description.len());
        out.push_str(INDENT);
        self.theme.key.bold().push_sgr(&mut out);
        push_padded(&mut out, key, self.key_width);
        out.push_str(SGR_RESET_STR);
        self.theme.description.push_sgr(&mut out);
        out.push_str(INDENT);
        out.push_str(description);
        out.push_str(SGR_RESET_STR);
        out
    }
}

fn indented(text: &str) -> String {
    let mut out = String::with_capacity(INDENT.len() + text.len());
    out.push_str(INDENT);
    out.push_str(text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULE: &str = "\x1b[38;5;240m  ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\x1b[0m";

    fn compile(lines: &[&str]) -> Vec<DisplayLine> {
        MarkupCompiler::default().compile(&Section::parse(lines))
    }

    #[test]
    fn rule_has_fixed_width() {
        let theme = Theme::default();
        assert_eq!(rule(&theme), RULE);
        assert_eq!(rule(&theme).matches('━').count(), RULE_WIDTH);
    }

    #[test]
    fn title_expands_to_three_lines() {
        assert_eq!(
            compile(&["T:HISTORY"]),
            vec![
                RULE.to_owned(),
                "\x1b[38;5;111m\x1b[1m  HISTORY\x1b[0m".to_owned(),
                RULE.to_owned(),
            ]
        );
    }

    #[test]
    fn group_header_expands_to_two_lines() {
        assert_eq!(
            compile(&["G:Search"]),
            vec![String::new(), "\x1b[38;5;150m\x1b[1m  ## Search\x1b[0m".to_owned()]
        );
    }

    #[test]
    fn row_is_padded_to_key_width() {
        let lines = compile(&["R:Ctrl+r|search history"]);
        assert_eq!(
            lines,
            vec![format!(
                "  \x1b[38;5;183m\x1b[1mCtrl+r{}\x1b[0m\x1b[38;5;252m  search history\x1b[0m",
                " ".repeat(16)
            )]
        );
    }

    #[test]
    fn row_key_column_width_is_configurable() {
        let compiler = MarkupCompiler::new(Theme::default(), 4);
        assert_eq!(compiler.key_width(), 4);
        let lines = compiler.compile(&Section::parse(["R:gg|top"]));
        assert!(lines[0].contains("gg  \x1b[0m"));
    }

    #[test]
    fn long_key_is_not_truncated() {
        let compiler = MarkupCompiler::new(Theme::default(), 3);
        let lines = compiler.compile(&Section::parse(["R:abcdef|x"]));
        assert!(lines[0].contains("\x1b[1mabcdef\x1b[0m"));
    }

    #[test]
    fn row_without_description() {
        let lines = compile(&["R:gg"]);
        assert!(lines[0].ends_with("\x1b[38;5;252m  \x1b[0m"));
    }

    #[test]
    fn note_is_dimmed() {
        assert_eq!(
            compile(&["N:careful"]),
            vec!["\x1b[38;5;109m\x1b[2m  > careful\x1b[0m".to_owned()]
        );
    }

    #[test]
    fn blank_and_raw() {
        assert_eq!(
            compile(&["B:", "plain text", "Z:odd"]),
            vec![String::new(), "  plain text".to_owned(), "  Z:odd".to_owned()]
        );
    }

    #[test]
    fn compile_into_replaces_previous_contents() {
        let compiler = MarkupCompiler::default();
        let mut out = vec!["stale".to_owned(); 10];
        compiler.compile_into(&Section::parse(["B:", "B:"]), &mut out);
        assert_eq!(out, vec![String::new(), String::new()]);
    }

    #[test]
    fn empty_section_compiles_to_nothing() {
        assert!(compile(&[]).is_empty());
    }

    #[test]
    fn mixed_section_line_count() {
        let lines = compile(&["T:A", "G:B", "R:c|d", "N:e", "B:", "raw"]);
        assert_eq!(lines.len(), 3 + 2 + 1 + 1 + 1 + 1);
    }

    #[test]
    fn custom_theme_flows_through() {
        let theme = Theme::builder()
            .key(tutor_style::Style::new().fg(1))
            .build();
        let compiler = MarkupCompiler::new(theme, 2);
        assert_eq!(compiler.theme().key.sgr(), "\x1b[38;5;1m");
        let lines = compiler.compile(&Section::parse(["R:k|d"]));
        assert!(lines[0].starts_with("  \x1b[38;5;1m\x1b[1mk "));
    }
}
