//! Card pool editing rules.
//!
//! Editing happens between sessions. The host saves the edited pool and
//! resets the session with it; the engine never sees an edit in progress.

use flashzilla_core::{Card, CardId, Environment};

use crate::{StoreError, ensure_unique};

/// Editable card pool.
#[derive(Debug, Clone)]
pub struct CardPool<E: Environment> {
    env: E,
    cards: Vec<Card>,
}

impl<E: Environment> CardPool<E> {
    /// Empty pool.
    pub fn new(env: E) -> Self {
        Self { env, cards: Vec::new() }
    }

    /// Pool seeded from a stored snapshot.
    ///
    /// # Errors
    ///
    /// - `StoreError::DuplicateCardId` if the snapshot repeats an id
    pub fn from_cards(env: E, cards: Vec<Card>) -> Result<Self, StoreError> {
        ensure_unique(&cards)?;
        Ok(Self { env, cards })
    }

    /// Add a card at the front of the pool.
    ///
    /// Surrounding whitespace is trimmed from both sides. The new card is
    /// reviewed last in the next session.
    ///
    /// # Errors
    ///
    /// - `StoreError::EmptyField` if the prompt or answer is blank
    pub fn add(&mut self, prompt: &str, answer: &str) -> Result<CardId, StoreError> {
        let prompt = prompt.trim();
        let answer = answer.trim();
        if prompt.is_empty() {
            return Err(StoreError::EmptyField { field: "prompt" });
        }
        if answer.is_empty() {
            return Err(StoreError::EmptyField { field: "answer" });
        }

        let id = CardId::generate_unique(&self.env, |id| self.cards.iter().any(|c| c.id() == id));
        self.cards.insert(0, Card::with_id(id, prompt, answer));
        Ok(id)
    }

    /// Remove the card with `id`.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if no card has this id
    pub fn remove(&mut self, id: CardId) -> Result<Card, StoreError> {
        let index =
            self.cards.iter().position(|c| c.id() == id).ok_or(StoreError::NotFound { id })?;
        Ok(self.cards.remove(index))
    }

    /// Remove the cards at `offsets`. Out-of-range offsets are ignored.
    ///
    /// Returns the number of cards removed.
    pub fn remove_at(&mut self, offsets: &[usize]) -> usize {
        let before = self.cards.len();
        let mut index = 0;
        self.cards.retain(|_| {
            let keep = !offsets.contains(&index);
            index += 1;
            keep
        });
        before - self.cards.len()
    }

    /// Cards in pool order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the pool has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Snapshot for saving and for resetting a session.
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
