//! Property tests for the scroll engine and key handling.

use proptest::prelude::*;
use tutor_core::event::KeyEvent;
use tutor_runtime::{ListNavigator, Motion, ViewState};

fn motion() -> impl Strategy<Value = Motion> {
    prop_oneof![
        Just(Motion::Down),
        Just(Motion::Up),
        Just(Motion::Top),
        Just(Motion::Bottom),
        Just(Motion::ToggleEnds),
    ]
}

fn check_invariant(state: &ViewState, visible: usize) -> Result<(), TestCaseError> {
    if state.total() == 0 {
        prop_assert_eq!(state.cursor(), 0);
    } else {
        prop_assert!(state.cursor() < state.total());
    }
    prop_assert!(state.offset() <= state.cursor());
    prop_assert!(state.cursor() < state.offset() + visible.max(1));
    let window = state.window(visible);
    prop_assert!(window.len() <= visible.max(1));
    if state.total() > 0 {
        prop_assert!(window.contains(&state.cursor()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn invariant_holds_after_every_motion(
        total in 0usize..200,
        visible in 0usize..60,
        motions in proptest::collection::vec(motion(), 0..100),
    ) {
        let mut state = ViewState::new(total);
        state.follow(visible);
        check_invariant(&state, visible)?;
        for m in motions {
            state.apply(m);
            state.follow(visible);
            check_invariant(&state, visible)?;
        }
    }

    #[test]
    fn invariant_survives_viewport_resizes(
        total in 1usize..200,
        steps in proptest::collection::vec((motion(), 1usize..60), 0..100),
    ) {
        let mut state = ViewState::new(total);
        for (m, visible) in steps {
            state.apply(m);
            state.follow(visible);
            check_invariant(&state, visible)?;
        }
    }

    #[test]
    fn g_followed_by_other_key_never_moves(
        total in 1usize..100,
        start in 0usize..100,
        other in prop::sample::select(vec![b'l', b'x', b'q', b'h', b'1', b'z', 0x1b, b'\r']),
    ) {
        let mut nav = ListNavigator::new(total);
        nav.state_mut().select(start);
        let before = nav.state().cursor();
        nav.handle(&KeyEvent::char('g'));
        nav.handle(&KeyEvent::from_byte(other));
        prop_assert_eq!(nav.state().cursor(), before);
        prop_assert!(!nav.is_pending());
    }

    #[test]
    fn toggle_is_an_involution_from_the_ends(total in 2usize..500) {
        let mut state = ViewState::new(total);
        state.apply(Motion::ToggleEnds);
        prop_assert_eq!(state.cursor(), total - 1);
        state.apply(Motion::ToggleEnds);
        prop_assert_eq!(state.cursor(), 0);
    }
}
