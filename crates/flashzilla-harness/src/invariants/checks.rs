//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use std::collections::HashSet;

use flashzilla_core::SessionState;

use super::{Invariant, InvariantKind, InvariantResult, SnapshotHistory, Violation};

/// Only the deck tail is ever interactive.
///
/// While the session is active the reported card must be the last pending
/// id; in every other state no card may be reported.
pub struct TailOnlyActive;

impl Invariant for TailOnlyActive {
    fn kind(&self) -> InvariantKind {
        InvariantKind::TailOnlyActive
    }

    fn check(&self, history: &SnapshotHistory) -> InvariantResult {
        for (i, snap) in history.snapshots.iter().enumerate() {
            let expected =
                if snap.state == SessionState::Active { snap.pending.last().copied() } else { None };
            if snap.active_card != expected {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "snapshot {i}: state {:?} reports {:?}, tail is {:?}",
                        snap.state,
                        snap.active_card,
                        snap.pending.last()
                    ),
                });
            }
        }
        Ok(())
    }
}

/// No two pending cards share an id.
pub struct UniqueCardIds;

impl Invariant for UniqueCardIds {
    fn kind(&self) -> InvariantKind {
        InvariantKind::UniqueCardIds
    }

    fn check(&self, history: &SnapshotHistory) -> InvariantResult {
        for (i, snap) in history.snapshots.iter().enumerate() {
            let mut seen = HashSet::with_capacity(snap.pending.len());
            if let Some(dup) = snap.pending.iter().find(|id| !seen.insert(**id)) {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("snapshot {i}: id {dup} pending twice"),
                });
            }
        }
        Ok(())
    }
}

/// Remaining time never increases within a generation.
pub struct ClockMonotonic;

impl Invariant for ClockMonotonic {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ClockMonotonic
    }

    fn check(&self, history: &SnapshotHistory) -> InvariantResult {
        for (before, after) in history.transitions() {
            if after.remaining_secs > before.remaining_secs {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "generation {}: remaining increased {} → {}",
                        before.generation, before.remaining_secs, after.remaining_secs
                    ),
                });
            }
        }
        Ok(())
    }
}

/// A complete session stays complete and frozen until the next reset.
pub struct CompleteIsTerminal;

impl Invariant for CompleteIsTerminal {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CompleteIsTerminal
    }

    fn check(&self, history: &SnapshotHistory) -> InvariantResult {
        for (before, after) in history.transitions() {
            if before.state != SessionState::Complete {
                continue;
            }
            let frozen = after.state == SessionState::Complete
                && after.remaining_secs == before.remaining_secs
                && after.pending == before.pending;
            if !frozen {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "generation {}: complete session changed to {:?} ({}s, {} pending)",
                        before.generation,
                        after.state,
                        after.remaining_secs,
                        after.pending.len()
                    ),
                });
            }
        }
        Ok(())
    }
}

/// An empty deck or an expired clock means the session is complete.
pub struct CompletionConsistent;

impl Invariant for CompletionConsistent {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CompletionConsistent
    }

    fn check(&self, history: &SnapshotHistory) -> InvariantResult {
        for (i, snap) in history.snapshots.iter().enumerate() {
            if snap.generation == 0 {
                continue;
            }
            let finished = snap.pending.is_empty() || snap.remaining_secs == 0;
            if finished && snap.state != SessionState::Complete {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "snapshot {i}: {} pending, {}s left, but state is {:?}",
                        snap.pending.len(),
                        snap.remaining_secs,
                        snap.state
                    ),
                });
            }
        }
        Ok(())
    }
}
