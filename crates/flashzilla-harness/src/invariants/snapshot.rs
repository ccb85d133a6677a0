//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of a session at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks, and on the history of snapshots for
//! properties that relate consecutive observations.

use flashzilla_core::{Card, CardId, Environment, Session, SessionState};

/// Snapshot of one session's observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Reset counter. Snapshots from different generations are unrelated.
    pub generation: u64,
    /// Lifecycle state.
    pub state: SessionState,
    /// Seconds left on the clock.
    pub remaining_secs: u32,
    /// Card the engine reports as interactive.
    pub active_card: Option<CardId>,
    /// Pending ids, head first.
    pub pending: Vec<CardId>,
}

impl SessionSnapshot {
    /// Capture the observable state of `session`.
    pub fn capture<E: Environment>(session: &Session<E>) -> Self {
        Self {
            generation: session.generation(),
            state: session.state(),
            remaining_secs: session.remaining_secs(),
            active_card: session.active_card().map(Card::id),
            pending: session.deck().cards().iter().map(Card::id).collect(),
        }
    }

    /// Idle session with nothing loaded.
    pub fn idle() -> Self {
        Self {
            generation: 0,
            state: SessionState::Idle,
            remaining_secs: 0,
            active_card: None,
            pending: Vec::new(),
        }
    }

    /// Set lifecycle state.
    #[must_use]
    pub fn with_state(mut self, state: SessionState) -> Self {
        self.state = state;
        self
    }

    /// Set generation.
    #[must_use]
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Set remaining seconds.
    #[must_use]
    pub fn with_remaining(mut self, secs: u32) -> Self {
        self.remaining_secs = secs;
        self
    }

    /// Set pending ids and the reported active card.
    #[must_use]
    pub fn with_pending(mut self, pending: Vec<CardId>, active_card: Option<CardId>) -> Self {
        self.pending = pending;
        self.active_card = active_card;
        self
    }
}

/// Ordered sequence of snapshots from one run.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    /// Snapshots in observation order.
    pub snapshots: Vec<SessionSnapshot>,
}

impl SnapshotHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History from explicit snapshots.
    pub fn from_snapshots(snapshots: Vec<SessionSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Append an observation.
    pub fn record(&mut self, snapshot: SessionSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Consecutive pairs within the same generation.
    pub fn transitions(&self) -> impl Iterator<Item = (&SessionSnapshot, &SessionSnapshot)> {
        self.snapshots
            .windows(2)
            .map(|w| (&w[0], &w[1]))
            .filter(|(before, after)| before.generation == after.generation)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True if nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
