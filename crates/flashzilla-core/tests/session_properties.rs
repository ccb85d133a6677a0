//! Property-based tests for the review session engine.
//!
//! Tests verify that invariants hold under arbitrary event sequences rather
//! than hand-picked scenarios.

use std::{
    collections::HashSet,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use flashzilla_core::{
    Card, CardId, Environment, Outcome, Resolution, Session, SessionConfig, SessionState,
};
use proptest::prelude::*;

/// Deterministic environment: every draw is a fresh counter value.
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

/// Environment that returns the same bytes on every draw.
#[derive(Clone, Copy)]
struct FixedEnv;

impl Environment for FixedEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = i as u8;
        }
    }
}

#[derive(Debug, Clone)]
enum Event {
    Tick,
    Foreground(bool),
    Outcome(bool),
    Reset(usize),
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => Just(Event::Tick),
        1 => any::<bool>().prop_map(Event::Foreground),
        6 => any::<bool>().prop_map(Event::Outcome),
        1 => (0usize..6).prop_map(Event::Reset),
    ]
}

fn snapshot(env: &SeqEnv, len: usize) -> Vec<Card> {
    (0..len).map(|i| Card::new(env, format!("q{i}"), format!("a{i}"))).collect()
}

fn apply(session: &mut Session<SeqEnv>, event: &Event) {
    match event {
        Event::Tick => {
            session.on_tick();
        },
        Event::Foreground(fg) => {
            session.on_foreground_change(*fg);
        },
        Event::Outcome(success) => {
            session.submit_outcome(Outcome::from(*success));
        },
        Event::Reset(len) => {
            let cards = snapshot(session.env(), *len);
            let _ = session.reset(cards);
        },
    }
}

fn started(duration: u32, len: usize) -> Session<SeqEnv> {
    let env = SeqEnv::default();
    let mut session =
        Session::new(env.clone(), SessionConfig::default().with_duration_secs(duration));
    let _ = session.reset(snapshot(&env, len));
    session
}

proptest! {
    #[test]
    fn prop_active_card_is_always_tail(
        duration in 0u32..20,
        len in 0usize..6,
        events in prop::collection::vec(event_strategy(), 0..80),
    ) {
        let mut session = started(duration, len);
        for event in &events {
            apply(&mut session, event);

            match session.active_card() {
                Some(card) => {
                    prop_assert_eq!(session.state(), SessionState::Active);
                    prop_assert_eq!(Some(card), session.deck().cards().last());
                },
                None => prop_assert!(
                    session.state() != SessionState::Active || session.deck().is_empty()
                ),
            }

            let ids: HashSet<CardId> = session.deck().cards().iter().map(Card::id).collect();
            prop_assert_eq!(ids.len(), session.deck().len());
        }
    }

    #[test]
    fn prop_retire_removes_exactly_active(len in 1usize..8, duration in 1u32..50) {
        let mut session = started(duration, len);
        let before = session.deck().cards().to_vec();
        let active = session.active_card().map(Card::id);

        let resolution = session.submit_outcome(Outcome::Correct);

        prop_assert_eq!(resolution, active.map(|id| Resolution::Retired { id }));
        prop_assert_eq!(session.deck().len(), before.len() - 1);
        prop_assert_eq!(session.deck().cards(), &before[..before.len() - 1]);
    }

    #[test]
    fn prop_requeue_is_fair(
        len in 1usize..7,
        outcomes in prop::collection::vec(any::<bool>(), 1..60),
    ) {
        let mut session = started(u32::MAX, len);
        // For each requeued copy: ids that must be consumed before it resurfaces.
        let mut waiting: Vec<(CardId, HashSet<CardId>)> = Vec::new();

        for success in outcomes {
            let Some(active) = session.active_card().map(Card::id) else { break };

            if let Some(pos) = waiting.iter().position(|(id, _)| *id == active) {
                let (_, owed) = waiting.remove(pos);
                prop_assert!(owed.is_empty(), "requeued card resurfaced early: {owed:?}");
            }
            for (_, owed) in &mut waiting {
                owed.remove(&active);
            }

            let others: HashSet<CardId> = session
                .deck()
                .cards()
                .iter()
                .map(Card::id)
                .filter(|id| *id != active)
                .collect();

            match session.submit_outcome(Outcome::from(success)) {
                Some(Resolution::Requeued { from, to }) => {
                    prop_assert_eq!(from, active);
                    prop_assert_ne!(to, from);
                    waiting.push((to, others));
                },
                Some(Resolution::Retired { id }) => prop_assert_eq!(id, active),
                None => prop_assert!(false, "outcome rejected in active session"),
            }
        }
    }

    #[test]
    fn prop_requeue_preserves_content(len in 1usize..6) {
        let mut session = started(100, len);
        let failed = session.active_card().cloned();

        session.submit_outcome(Outcome::Wrong);

        let head = session.deck().cards().first().cloned();
        match (failed, head) {
            (Some(failed), Some(head)) => {
                prop_assert_ne!(failed.id(), head.id());
                prop_assert!(failed.same_content(&head));
            },
            _ => prop_assert!(false, "deck unexpectedly empty"),
        }
    }

    #[test]
    fn prop_clock_never_increases_without_reset(
        duration in 0u32..30,
        len in 0usize..5,
        events in prop::collection::vec(event_strategy(), 0..120),
    ) {
        let mut session = started(duration, len);
        let mut previous = session.remaining_secs();
        let mut generation = session.generation();

        for event in &events {
            apply(&mut session, event);
            if session.generation() == generation {
                prop_assert!(session.remaining_secs() <= previous);
            }
            previous = session.remaining_secs();
            generation = session.generation();
        }
    }

    #[test]
    fn prop_complete_is_terminal_until_reset(
        duration in 0u32..10,
        len in 0usize..4,
        events in prop::collection::vec(event_strategy(), 0..80),
    ) {
        let mut session = started(duration, len);
        let mut generation = session.generation();
        let mut was_complete = session.is_complete();

        for event in &events {
            let before_remaining = session.remaining_secs();
            let before_len = session.deck().len();
            apply(&mut session, event);

            let reset_happened = session.generation() != generation;
            if was_complete && !reset_happened {
                prop_assert!(session.is_complete());
                prop_assert_eq!(session.remaining_secs(), before_remaining);
                prop_assert_eq!(session.deck().len(), before_len);
            }
            if session.deck().is_empty() || session.remaining_secs() == 0 {
                prop_assert!(session.is_complete());
            }

            was_complete = session.is_complete();
            generation = session.generation();
        }
    }
}

#[test]
fn three_card_walkthrough() {
    let env = SeqEnv::default();
    let a = Card::new(&env, "A", "a");
    let b = Card::new(&env, "B", "b");
    let c = Card::new(&env, "C", "c");
    let mut session = Session::new(env, SessionConfig::default());
    session.reset(vec![a.clone(), b.clone(), c.clone()]).unwrap();

    session.submit_outcome(Outcome::Wrong);
    let prompts: Vec<_> = session.deck().cards().iter().map(Card::prompt).collect();
    assert_eq!(prompts, ["C", "A", "B"]);
    let c_prime = session.deck().cards()[0].id();
    assert_ne!(c_prime, c.id());

    session.submit_outcome(Outcome::Correct);
    assert_eq!(session.active_card().map(Card::id), Some(a.id()));

    session.submit_outcome(Outcome::Correct);
    assert_eq!(session.active_card().map(Card::id), Some(c_prime));

    session.submit_outcome(Outcome::Correct);
    assert!(session.is_complete());
}

#[test]
fn last_second_expires_with_cards_pending() {
    let env = SeqEnv::default();
    let mut session = Session::new(env.clone(), SessionConfig::default().with_duration_secs(1));
    session.reset(snapshot(&env, 3)).unwrap();

    assert_eq!(session.on_tick(), SessionState::Complete);
    assert_eq!(session.remaining_secs(), 0);
    assert_eq!(session.deck().len(), 3);

    for _ in 0..5 {
        session.on_tick();
        session.submit_outcome(Outcome::Correct);
        session.submit_outcome(Outcome::Wrong);
    }
    assert_eq!(session.remaining_secs(), 0);
    assert_eq!(session.deck().len(), 3);
}

#[test]
fn repeated_wrong_answers_return_when_draws_repeat() {
    let card = Card::with_id(CardId::from_uuid(uuid::Uuid::from_u128(1)), "A", "a");
    let mut session = Session::new(FixedEnv, SessionConfig::default());
    session.reset(vec![card.clone()]).unwrap();

    let mut previous = card.id();
    for _ in 0..3 {
        session.submit_outcome(Outcome::Wrong);
        let active = session.active_card().map(Card::id).unwrap();
        assert_ne!(active, previous);
        assert_eq!(session.deck().len(), 1);
        previous = active;
    }
    assert_eq!(session.state(), SessionState::Active);
}
