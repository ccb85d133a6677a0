//! Reference model for model-based testing.
//!
//! Operations are applied to both [`ModelSession`] and a real
//! [`flashzilla_core::Session`]; their [`ObservableState`]s must match after
//! every step.

mod operation;
mod session;

use flashzilla_core::{Card, Environment, Session};
pub use operation::{Operation, SmallCard};
pub use session::{ModelSession, ObservableState};

impl ObservableState {
    /// Project a real session onto the model's observable state.
    pub fn from_session<E: Environment>(session: &Session<E>) -> Self {
        let content = |card: &Card| (card.prompt().to_owned(), card.answer().to_owned());
        Self {
            state: session.state(),
            remaining_secs: session.remaining_secs(),
            queue: session.deck().cards().iter().map(content).collect(),
            active: session.active_card().map(content),
        }
    }
}

/// Apply `op` to a real session, minting fresh ids for reset snapshots.
pub fn apply_to_session<E: Environment>(session: &mut Session<E>, op: &Operation) {
    match op {
        Operation::Tick => {
            session.on_tick();
        },
        Operation::Foreground(is_foreground) => {
            session.on_foreground_change(*is_foreground);
        },
        Operation::Outcome { .. } => {
            if let Some(outcome) = op.outcome() {
                session.submit_outcome(outcome);
            }
        },
        Operation::Reset(cards) => {
            let cards: Vec<_> = cards.iter().map(|c| c.to_card(session.env())).collect();
            if let Err(err) = session.reset(cards) {
                tracing::warn!(%err, "reset rejected");
            }
        },
    }
}
