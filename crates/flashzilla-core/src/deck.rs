//! Ordered review queue with a FIFO retry policy.
//!
//! Cards are consumed from the tail. A failed card is replaced by a copy
//! with a new id inserted at the head, so it only resurfaces after every
//! other pending card has had one pass.
//!
//! ```text
//!   head                          tail (active)
//!   ┌────┬────┬────┐  fail C     ┌────┬────┬────┐
//!   │ A  │ B  │ C  │ ──────────> │ C' │ A  │ B  │
//!   └────┴────┴────┘             └────┴────┴────┘
//! ```

use crate::{
    card::{Card, CardId, find_duplicate_id},
    env::Environment,
    error::SessionError,
};

/// Pending cards for one session.
///
/// # Invariants
///
/// - Only the tail is ever reported as active.
/// - No two pending cards share an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pending: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending queue with `cards`.
    ///
    /// Order is preserved: the last card becomes active first.
    ///
    /// # Errors
    ///
    /// - `SessionError::DuplicateCardId` if two cards share an id. The
    ///   previous queue is kept untouched.
    pub fn load(&mut self, cards: Vec<Card>) -> Result<(), SessionError> {
        if let Some(id) = find_duplicate_id(&cards) {
            return Err(SessionError::DuplicateCardId { id });
        }
        self.pending = cards;
        Ok(())
    }

    /// The card eligible for an outcome. `None` if the deck is empty.
    pub fn active_card(&self) -> Option<&Card> {
        self.pending.last()
    }

    /// Remove the active card if its id is `id`.
    ///
    /// Returns the removed card, or `None` (no-op) if the deck is empty or
    /// `id` is not the tail.
    pub fn retire(&mut self, id: CardId) -> Option<Card> {
        if self.active_card()?.id() != id {
            return None;
        }
        self.pending.pop()
    }

    /// Send the active card to the back of the line under a new id.
    ///
    /// Returns the id of the reissued card, or `None` (no-op) if the deck is
    /// empty or `id` is not the tail.
    pub fn requeue<E: Environment>(&mut self, id: CardId, env: &E) -> Option<CardId> {
        let failed = self.retire(id)?;

        let reissued = failed.reissue(env, |id| self.contains(id));
        let new_id = reissued.id();
        self.pending.insert(0, reissued);

        debug_assert!(find_duplicate_id(&self.pending).is_none());
        Some(new_id)
    }

    /// True if a pending card has this id.
    pub fn contains(&self, id: CardId) -> bool {
        self.pending.iter().any(|card| card.id() == id)
    }

    /// Pending cards, head first. The last element is the active card.
    pub fn cards(&self) -> &[Card] {
        &self.pending
    }

    /// Number of pending cards.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True once every card has been retired.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::{CountingEnv, FixedEnv};

    fn deck_of(env: &CountingEnv, prompts: &[&str]) -> Deck {
        let mut deck = Deck::new();
        let cards = prompts.iter().map(|p| Card::new(env, *p, p.to_uppercase())).collect();
        deck.load(cards).unwrap();
        deck
    }

    fn prompts(deck: &Deck) -> Vec<&str> {
        deck.cards().iter().map(Card::prompt).collect()
    }

    #[test]
    fn tail_is_active() {
        let env = CountingEnv::default();
        let deck = deck_of(&env, &["a", "b", "c"]);
        assert_eq!(deck.active_card().map(Card::prompt), Some("c"));
    }

    #[test]
    fn retire_only_accepts_tail() {
        let env = CountingEnv::default();
        let mut deck = deck_of(&env, &["a", "b", "c"]);
        let head = deck.cards()[0].id();

        assert!(deck.retire(head).is_none());
        assert_eq!(deck.len(), 3);

        let tail = deck.active_card().unwrap().id();
        assert_eq!(deck.retire(tail).map(|c| c.id()), Some(tail));
        assert_eq!(prompts(&deck), ["a", "b"]);
    }

    #[test]
    fn requeue_moves_to_head_with_new_id() {
        let env = CountingEnv::default();
        let mut deck = deck_of(&env, &["a", "b", "c"]);
        let tail = deck.active_card().unwrap().id();

        let new_id = deck.requeue(tail, &env).unwrap();

        assert_ne!(new_id, tail);
        assert!(!deck.contains(tail));
        assert_eq!(deck.cards()[0].id(), new_id);
        assert_eq!(prompts(&deck), ["c", "a", "b"]);
    }

    #[test]
    fn single_card_requeue_stays_active() {
        let env = CountingEnv::default();
        let mut deck = deck_of(&env, &["only"]);
        let id = deck.active_card().unwrap().id();

        let new_id = deck.requeue(id, &env).unwrap();

        assert_eq!(deck.len(), 1);
        assert_eq!(deck.active_card().map(Card::id), Some(new_id));
    }

    #[test]
    fn repeated_requeue_terminates_when_draws_repeat() {
        let env = FixedEnv;
        let mut deck = Deck::new();
        deck.load(vec![
            Card::with_id(CardId::from_uuid(uuid::Uuid::from_u128(1)), "a", "A"),
            Card::with_id(CardId::from_uuid(uuid::Uuid::from_u128(2)), "b", "B"),
        ])
        .unwrap();

        for _ in 0..6 {
            let active = deck.active_card().unwrap().id();
            let new_id = deck.requeue(active, &env).unwrap();

            assert_ne!(new_id, active);
            assert_eq!(deck.cards()[0].id(), new_id);
            assert!(find_duplicate_id(deck.cards()).is_none());
        }
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn empty_deck_operations_are_noops() {
        let env = CountingEnv::default();
        let mut deck = Deck::new();
        let stray = CardId::generate(&env);

        assert!(deck.retire(stray).is_none());
        assert!(deck.requeue(stray, &env).is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn duplicate_load_keeps_previous_queue() {
        let env = CountingEnv::default();
        let mut deck = deck_of(&env, &["a", "b"]);
        let before = deck.clone();

        let dup = Card::new(&env, "x", "y");
        let err = deck.load(vec![dup.clone(), dup.clone()]).unwrap_err();

        assert_eq!(err, SessionError::DuplicateCardId { id: dup.id() });
        assert_eq!(deck, before);
    }
}
