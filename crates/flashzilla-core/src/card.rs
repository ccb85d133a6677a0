//! Card identity and content.
//!
//! A [`Card`] pairs a prompt with its answer under an opaque [`CardId`].
//! Identity, not content, makes two cards distinct: a deck may hold two cards
//! with the same prompt and answer as long as their ids differ.

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::env::Environment;

/// Opaque, never-reused card identity.
///
/// Ids are UUIDv4 values minted from [`Environment`] randomness, so a seeded
/// simulation produces the same ids on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    /// Mint a fresh id from the environment's randomness.
    pub fn generate<E: Environment>(env: &E) -> Self {
        let mut bytes = [0u8; 16];
        env.random_bytes(&mut bytes);
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Mint an id for which `taken` returns false.
    ///
    /// Draws once from the environment. If that id is taken, the search steps
    /// through the random bits of the rejected id instead of drawing again, so
    /// it ends after at most one step per taken id even when the environment
    /// repeats itself.
    pub fn generate_unique<E: Environment>(env: &E, taken: impl Fn(CardId) -> bool) -> Self {
        let mut id = Self::generate(env);
        while taken(id) {
            id = id.successor();
        }
        id
    }

    /// Next v4 id after this one. The low byte is never masked, so the result
    /// always differs from `self`.
    fn successor(self) -> Self {
        let bytes = self.0.as_u128().wrapping_add(1).to_be_bytes();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Wrap an existing UUID, e.g. one read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single prompt/answer pair.
///
/// Cards are immutable once created. A failed card is not moved in the queue;
/// it is replaced by [`Card::reissue`], which keeps the content and mints a
/// new id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    prompt: String,
    answer: String,
}

impl Card {
    /// Create a card with a freshly minted id.
    pub fn new<E: Environment>(
        env: &E,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self::with_id(CardId::generate(env), prompt, answer)
    }

    /// Create a card with a known id (snapshot records, tests).
    pub fn with_id(id: CardId, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { id, prompt: prompt.into(), answer: answer.into() }
    }

    /// Copy of this card under a new identity.
    ///
    /// The new id differs from this card's and from every id `taken` accepts.
    pub fn reissue<E: Environment>(&self, env: &E, taken: impl Fn(CardId) -> bool) -> Self {
        let id = CardId::generate_unique(env, |id| id == self.id || taken(id));
        Self::with_id(id, self.prompt.clone(), self.answer.clone())
    }

    /// Card identity.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Question side.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answer side.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// True if both cards carry the same prompt and answer, ignoring identity.
    pub fn same_content(&self, other: &Card) -> bool {
        self.prompt == other.prompt && self.answer == other.answer
    }
}

/// First id that appears more than once in `cards`, if any.
pub fn find_duplicate_id(cards: &[Card]) -> Option<CardId> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().map(Card::id).find(|id| !seen.insert(*id))
}
