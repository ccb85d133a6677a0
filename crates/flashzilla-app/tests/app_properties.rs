//! Property-based tests for the App state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use flashzilla_app::{App, AppAction, AppEvent, KeyInput};
use flashzilla_core::{Card, Environment, Outcome, SessionConfig, SessionState};
use proptest::prelude::*;

#[derive(Clone, Default)]
struct SeqEnv(Arc<AtomicU64>);

impl Environment for SeqEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        let value = self.0.fetch_add(1, Ordering::Relaxed).wrapping_add(1).to_le_bytes();
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = value[i % value.len()];
        }
    }
}

/// Generate random user and platform events (no storage results).
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        4 => Just(AppEvent::Tick),
        1 => any::<bool>().prop_map(AppEvent::Foreground),
        3 => (-300.0f32..300.0).prop_map(|dx| AppEvent::Swipe { dx }),
        3 => any::<bool>().prop_map(|ok| AppEvent::Outcome(Outcome::from(ok))),
        2 => prop::sample::select(vec![
            KeyInput::Char(' '),
            KeyInput::Enter,
            KeyInput::Left,
            KeyInput::Right,
            KeyInput::Char('h'),
            KeyInput::Char('l'),
            KeyInput::Char('x'),
        ])
        .prop_map(AppEvent::Key),
    ]
}

fn started_app(env: &SeqEnv, len: usize, secs: u32) -> App<SeqEnv> {
    let cards = (0..len).map(|i| Card::new(env, format!("q{i}"), format!("a{i}"))).collect();
    let mut app = App::new(env.clone(), SessionConfig::default().with_duration_secs(secs));
    let _ = app.handle(AppEvent::PoolLoaded(cards));
    app
}

proptest! {
    #[test]
    fn prop_deck_never_grows(
        len in 0usize..6,
        secs in 0u32..20,
        events in prop::collection::vec(event_strategy(), 0..100),
    ) {
        let env = SeqEnv::default();
        let mut app = started_app(&env, len, secs);
        let mut pending = app.pending_count();

        for event in events {
            let actions = app.handle(event);
            prop_assert!(app.pending_count() <= pending);
            prop_assert!(actions.iter().all(|a| matches!(a, AppAction::Render)));
            pending = app.pending_count();
        }
    }

    #[test]
    fn prop_finished_session_ignores_input(
        events in prop::collection::vec(event_strategy(), 0..50),
    ) {
        let env = SeqEnv::default();
        let mut app = started_app(&env, 2, 1);
        let _ = app.handle(AppEvent::Tick);
        prop_assert_eq!(app.state(), SessionState::Complete);

        for event in events {
            let _ = app.handle(event);
            prop_assert_eq!(app.state(), SessionState::Complete);
            prop_assert_eq!(app.pending_count(), 2);
            prop_assert_eq!(app.remaining_secs(), 0);
        }
    }
}

#[test]
fn duplicate_pool_keeps_current_session() {
    let env = SeqEnv::default();
    let mut app = started_app(&env, 3, 100);
    let dup = Card::new(&env, "dup", "dup");

    let actions = app.handle(AppEvent::PoolLoaded(vec![dup.clone(), dup]));

    assert_eq!(actions, vec![AppAction::Render]);
    assert_eq!(app.pending_count(), 3);
    assert_eq!(app.state(), SessionState::Active);
    assert!(app.status_message().is_some_and(|m| m.starts_with("Couldn't start session")));
}
