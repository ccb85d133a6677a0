//! Fuzz target for the review session state machine
//!
//! # Strategy
//!
//! - Arbitrary interleavings of ticks, focus changes, outcomes and resets
//! - Durations from zero upward, including sessions that expire mid-run
//! - Seeded id minting so crashes replay exactly
//!
//! # Invariants
//!
//! - Real session and reference model agree after every operation
//! - Only the deck tail is ever interactive
//! - Pending ids stay unique
//! - Remaining time never increases without a reset
//! - Complete stays complete until the next reset

#![no_main]

use arbitrary::Arbitrary;
use flashzilla_core::{Session, SessionConfig};
use flashzilla_harness::{
    InvariantRegistry, ModelSession, ObservableState, Operation, SessionSnapshot, SimEnv,
    SnapshotHistory, apply_to_session,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct SessionScenario {
    seed: u64,
    duration_secs: u8,
    operations: Vec<Operation>,
}

fuzz_target!(|scenario: SessionScenario| {
    let duration = u32::from(scenario.duration_secs);
    let config = SessionConfig::default().with_duration_secs(duration);
    let mut session = Session::new(SimEnv::with_seed(scenario.seed), config);
    let mut model = ModelSession::new(duration);
    let registry = InvariantRegistry::standard();
    let mut history = SnapshotHistory::new();

    for op in &scenario.operations {
        apply_to_session(&mut session, op);
        model.apply(op);

        assert_eq!(
            ObservableState::from_session(&session),
            model.observable_state(),
            "model divergence after {op:?}"
        );

        history.record(SessionSnapshot::capture(&session));
    }

    if let Err(violations) = registry.check_all(&history) {
        panic!("invariant violations: {violations:?}");
    }
});
