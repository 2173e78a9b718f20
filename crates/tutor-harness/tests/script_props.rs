#![forbid(unsafe_code)]

//! Property tests: arbitrary key scripts against arbitrary catalogs.

use proptest::prelude::*;
use tutor_content::{Catalog, CatalogEntry, Section};
use tutor_core::input_parser::ScriptedSource;
use tutor_harness::run_script;
use tutor_runtime::{ExitReason, Mode, ViewState};

fn catalog(sizes: &[usize]) -> Catalog {
    let entries = sizes
        .iter()
        .map(|&n| {
            let lines: Vec<String> = (0..n).map(|i| format!("R:k{i}|d")).collect();
            CatalogEntry::new("s", Section::parse(lines))
        })
        .collect();
    Catalog::new("props", entries).unwrap()
}

fn key() -> impl Strategy<Value = u8> {
    prop::sample::select(b"jkgG%lhx123456789\r\x1bz".to_vec())
}

fn assert_in_bounds(state: &ViewState) {
    if state.total() == 0 {
        assert_eq!(state.cursor(), 0);
    } else {
        assert!(state.cursor() < state.total());
    }
}

proptest! {
    #[test]
    fn scripts_keep_state_in_bounds(
        sizes in prop::collection::vec(0usize..60, 1..12),
        keys in prop::collection::vec(key(), 0..80),
        rows in 0u16..60,
    ) {
        let run = run_script(catalog(&sizes), rows, ScriptedSource::new().keys(&keys));
        prop_assert_ne!(run.reason, ExitReason::ReadError);
        assert_in_bounds(run.app.menu().state());
        if let Mode::Section { index, nav } = run.app.mode() {
            prop_assert!(*index < sizes.len());
            prop_assert_eq!(nav.state().total(), run.app.lines().len());
            assert_in_bounds(nav.state());
        }
        prop_assert!(!run.backend.frames().is_empty());
    }

    #[test]
    fn scripts_without_q_or_x_never_quit(
        sizes in prop::collection::vec(1usize..30, 1..10),
        keys in prop::collection::vec(
            prop::sample::select(b"jkgG%l123\r\x1bz".to_vec()),
            0..60,
        ),
    ) {
        let run = run_script(catalog(&sizes), 24, ScriptedSource::new().keys(&keys));
        prop_assert_eq!(run.reason, ExitReason::EndOfInput);
        prop_assert_eq!(run.backend.frames().len(), keys.len() + 1);
    }
}
