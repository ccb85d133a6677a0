//! Fuzz target for deck file parsing and pool edits
//!
//! # Strategy
//!
//! - Arbitrary bytes as deck file content
//! - Arbitrary add/remove edits on whatever parsed
//!
//! # Invariants
//!
//! - Malformed content is an error, never a panic
//! - A parsed pool never holds duplicate ids, before or after edits
//! - Added cards have trimmed, non-empty fields

#![no_main]

use arbitrary::Arbitrary;
use flashzilla_core::find_duplicate_id;
use flashzilla_harness::SimEnv;
use flashzilla_store::{CardPool, CardStore, MemoryStore, decode_cards};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum Edit {
    Add { prompt: String, answer: String },
    RemoveAt { offsets: Vec<u8> },
}

#[derive(Debug, Clone, Arbitrary)]
struct PoolScenario {
    content: Vec<u8>,
    edits: Vec<Edit>,
}

fuzz_target!(|scenario: PoolScenario| {
    let Ok(cards) = decode_cards(&scenario.content) else {
        return;
    };
    let Ok(mut pool) = CardPool::from_cards(SimEnv::with_seed(0), cards) else {
        return;
    };

    for edit in &scenario.edits {
        match edit {
            Edit::Add { prompt, answer } => {
                if pool.add(prompt, answer).is_ok() {
                    let card = &pool.cards()[0];
                    assert!(!card.prompt().is_empty() && !card.answer().is_empty());
                    assert_eq!(card.prompt(), card.prompt().trim());
                }
            },
            Edit::RemoveAt { offsets } => {
                let offsets: Vec<usize> = offsets.iter().map(|o| usize::from(*o)).collect();
                pool.remove_at(&offsets);
            },
        }
        assert!(find_duplicate_id(pool.cards()).is_none());
    }

    let store = MemoryStore::new();
    store.save(pool.cards()).expect("unique pool saves");
    assert_eq!(store.load().expect("saved pool loads"), pool.into_cards());
});

