#![forbid(unsafe_code)]

//! Headless testing for the tutor viewer.
//!
//! - **Scripted runs**: [`HeadlessBackend`] feeds keys from a
//!   [`ScriptedSource`](tutor_core::input_parser::ScriptedSource) and keeps
//!   every frame the program presents.
//! - **Frame snapshots**: frames are compared as plain text against stored
//!   `.snap` files.
//!
//! # Quick Start
//!
//! ```ignore
//! use tutor_harness::{assert_snapshot, run_script};
//!
//! let run = run_script(catalog, 24, ScriptedSource::new().keys(b"1G"));
//! assert_snapshot!("section_bottom", &run.backend.last_frame_text().unwrap());
//! ```
//!
//! # Updating Snapshots
//!
//! Run tests with `BLESS=1` to create or update snapshot files:
//!
//! ```sh
//! BLESS=1 cargo test -p tutor-harness
//! ```
//!
//! Snapshot files are stored under `tests/snapshots/` relative to the
//! crate's `CARGO_MANIFEST_DIR`.

pub mod headless;

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

pub use headless::{HeadlessBackend, ScriptRun, run_app, run_script, run_with_config};

// ============================================================================
// ANSI Stripping
// ============================================================================

/// Remove escape sequences, keeping the printable text and newlines.
///
/// Handles CSI sequences (`ESC [` parameters, final byte `@`..`~`) and
/// two-byte escapes. A trailing lone `ESC` is dropped.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(_) | None => {}
        }
    }
    out
}

// ============================================================================
// Match Modes & Normalization
// ============================================================================

/// Comparison mode for snapshot testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact string comparison.
    Exact,
    /// Trim trailing whitespace on each line before comparing.
    TrimTrailing,
}

fn normalize(text: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => text.to_string(),
        MatchMode::TrimTrailing => text
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

// ============================================================================
// Diff
// ============================================================================

/// Line-by-line diff of two texts.
///
/// Lines prefixed with ` ` match, `-` appear only in `expected`, `+` only in
/// `actual`. Empty when the inputs are identical.
#[must_use]
pub fn diff_text(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let max_lines = expected_lines.len().max(actual_lines.len());
    let mut out = String::new();
    let mut has_diff = false;

    for i in 0..max_lines {
        let exp = expected_lines.get(i).copied();
        let act = actual_lines.get(i).copied();

        // Writing to a String cannot fail.
        let _ = match (exp, act) {
            (Some(e), Some(a)) if e == a => writeln!(out, " {e}"),
            (Some(e), Some(a)) => {
                has_diff = true;
                writeln!(out, "-{e}\n+{a}")
            }
            (Some(e), None) => {
                has_diff = true;
                writeln!(out, "-{e}")
            }
            (None, Some(a)) => {
                has_diff = true;
                writeln!(out, "+{a}")
            }
            (None, None) => Ok(()),
        };
    }

    if has_diff { out } else { String::new() }
}

// ============================================================================
// Snapshot Assertion
// ============================================================================

fn snapshot_path(base_dir: &Path, name: &str) -> PathBuf {
    base_dir
        .join("tests")
        .join("snapshots")
        .join(format!("{name}.snap"))
}

fn is_bless() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Assert that `actual` matches the stored snapshot `name`.
///
/// # Panics
///
/// * If the snapshot file does not exist and `BLESS=1` is **not** set.
/// * If the text does not match the stored snapshot.
pub fn assert_text_snapshot(name: &str, actual: &str, base_dir: &str, mode: MatchMode) {
    let path = snapshot_path(Path::new(base_dir), name);

    if is_bless() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create snapshot directory");
        }
        std::fs::write(&path, actual).expect("failed to write snapshot");
        return;
    }

    match std::fs::read_to_string(&path) {
        Ok(expected) => {
            let norm_expected = normalize(&expected, mode);
            let norm_actual = normalize(actual, mode);
            if norm_expected != norm_actual {
                let diff = diff_text(&norm_expected, &norm_actual);
                panic!(
                    "\n\
                     === Snapshot mismatch: '{name}' ===\n\
                     File: {}\n\
                     Mode: {mode:?}\n\
                     Set BLESS=1 to update.\n\n\
                     Diff (- expected, + actual):\n{diff}",
                    path.display()
                );
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            panic!(
                "\n\
                 === No snapshot found: '{name}' ===\n\
                 Expected at: {}\n\
                 Run with BLESS=1 to create it.\n\n\
                 Actual output:\n{actual}",
                path.display(),
            );
        }
        Err(e) => panic!("Failed to read snapshot '{}': {e}", path.display()),
    }
}

/// Snapshot assertion for the calling crate, ignoring trailing whitespace.
///
/// ```ignore
/// assert_snapshot!("menu", &text);
/// assert_snapshot!("menu", &text, MatchMode::Exact);
/// ```
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $text:expr) => {
        $crate::assert_text_snapshot(
            $name,
            $text,
            env!("CARGO_MANIFEST_DIR"),
            $crate::MatchMode::TrimTrailing,
        )
    };
    ($name:expr, $text:expr, $mode:expr) => {
        $crate::assert_text_snapshot($name, $text, env!("CARGO_MANIFEST_DIR"), $mode)
    };
}
