//! Deck command tests against a real file.

use flashzilla_core::Card;
use flashzilla_store::{CardStore, FileStore, StoreError};
use flashzilla_tui::{RuntimeError, SystemEnv, commands};
use tempfile::TempDir;

fn store(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("deck").join("cards.json"))
}

#[test]
fn add_creates_deck_file() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let id = commands::add(&store, SystemEnv::new(), "  capital of France ", "Paris").unwrap();

    let cards = store.load().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id(), id);
    assert_eq!(cards[0].prompt(), "capital of France");
}

#[test]
fn newest_card_goes_to_head() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    commands::add(&store, SystemEnv::new(), "first", "1").unwrap();
    commands::add(&store, SystemEnv::new(), "second", "2").unwrap();

    let prompts: Vec<_> = store.load().unwrap().iter().map(|c| c.prompt().to_owned()).collect();
    assert_eq!(prompts, ["second", "first"]);
}

#[test]
fn blank_card_is_rejected_and_nothing_saved() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    let err = commands::add(&store, SystemEnv::new(), "   ", "answer").unwrap_err();

    assert!(matches!(err, RuntimeError::Store(StoreError::EmptyField { .. })));
    assert!(!store.path().exists());
}

#[test]
fn list_prints_positions() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    commands::add(&store, SystemEnv::new(), "a", "1").unwrap();
    commands::add(&store, SystemEnv::new(), "b", "2").unwrap();

    let mut out = Vec::new();
    let count = commands::list(&store, &mut out).unwrap();

    assert_eq!(count, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "0\tb\t2\n1\ta\t1\n");
}

#[test]
fn list_keeps_multiline_fields_on_one_line() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    commands::add(&store, SystemEnv::new(), "first\nsecond", "a\tb").unwrap();
    commands::add(&store, SystemEnv::new(), r"C:\deck", "café").unwrap();

    let mut out = Vec::new();
    commands::list(&store, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0\tC:\\\\deck\tcafé\n1\tfirst\\nsecond\ta\\tb\n"
    );
}

#[test]
fn remove_by_position_ignores_out_of_range() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    for prompt in ["a", "b", "c"] {
        commands::add(&store, SystemEnv::new(), prompt, "x").unwrap();
    }

    let removed = commands::remove(&store, SystemEnv::new(), &[0, 2, 9]).unwrap();

    assert_eq!(removed, 2);
    let cards: Vec<Card> = store.load().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].prompt(), "b");
}
