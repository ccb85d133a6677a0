//! Card pool storage for Flashzilla.
//!
//! The review engine never touches storage. Hosts load a snapshot from a
//! [`CardStore`] at reset, edit it through [`CardPool`] outside a session,
//! save it, and reset the session with the edited snapshot.
//!
//! The trait is synchronous (no async) to match the engine's synchronous
//! API; the pool is small and read once per session.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod file;
mod memory;
mod pool;

use flashzilla_core::{Card, find_duplicate_id};

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use pool::CardPool;

/// Persistence for the card pool.
///
/// Order is significant: it is the initial queue order, and the last card
/// is reviewed first.
pub trait CardStore: Send + Sync {
    /// Load the stored pool.
    ///
    /// # Invariants
    ///
    /// - Post: the returned cards have pairwise distinct ids
    /// - An absent pool loads as empty, not as an error
    fn load(&self) -> Result<Vec<Card>, StoreError>;

    /// Replace the stored pool.
    ///
    /// # Invariants
    ///
    /// - Pre: `cards` have pairwise distinct ids
    /// - Post: a subsequent `load` returns `cards` in the same order
    fn save(&self, cards: &[Card]) -> Result<(), StoreError>;
}

/// Reject a pool whose ids are not unique.
pub(crate) fn ensure_unique(cards: &[Card]) -> Result<(), StoreError> {
    match find_duplicate_id(cards) {
        Some(id) => Err(StoreError::DuplicateCardId { id }),
        None => Ok(()),
    }
}

/// Parse a JSON pool snapshot.
///
/// # Errors
///
/// - `StoreError::Json` if `bytes` is not an array of card records
/// - `StoreError::DuplicateCardId` if two records share an id
pub fn decode_cards(bytes: &[u8]) -> Result<Vec<Card>, StoreError> {
    let cards: Vec<Card> = serde_json::from_slice(bytes)?;
    ensure_unique(&cards)?;
    Ok(cards)
}
