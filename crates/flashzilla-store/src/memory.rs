use std::sync::{Arc, Mutex};

use flashzilla_core::Card;

use crate::{CardStore, StoreError, ensure_unique};

/// In-memory card pool for testing and simulation.
///
/// Clones share the same pool through `Arc<Mutex<>>`, so a test can keep a
/// handle while a driver owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Default)]
struct MemoryStoreInner {
    cards: Vec<Card>,
    saves: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `cards`.
    pub fn with_cards(cards: Vec<Card>) -> Self {
        let store = Self::new();
        store.lock().cards = cards;
        store
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned (a thread panicked while
    /// holding the lock). This is acceptable for test/simulation code.
    #[allow(clippy::expect_used)]
    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryStoreInner> {
        self.inner.lock().expect("Mutex poisoned")
    }
}

impl CardStore for MemoryStore {
    fn load(&self) -> Result<Vec<Card>, StoreError> {
        let cards = self.lock().cards.clone();
        ensure_unique(&cards)?;
        Ok(cards)
    }

    fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        ensure_unique(cards)?;
        let mut inner = self.lock();
        inner.cards = cards.to_vec();
        inner.saves += 1;
        Ok(())
    }
}
