//! Error types for the review session engine.
//!
//! The engine performs no I/O, so the taxonomy is narrow: late or duplicate
//! UI events are silent no-ops, and the only reportable failure is a snapshot
//! that would break the deck's identity invariant.

use thiserror::Error;

use crate::card::CardId;

/// Errors returned by [`crate::Session`] and [`crate::Deck`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The snapshot holds two cards with the same id.
    ///
    /// The load is rejected and the previous deck is kept.
    #[error("snapshot contains duplicate card id {id}")]
    DuplicateCardId {
        /// The repeated id.
        id: CardId,
    },
}
