//! Deck commands.
//!
//! Editing happens outside a review session: each command loads the deck
//! file, applies one [`CardPool`] edit and saves the result. The next review
//! starts from the edited pool.

use std::io::Write;

use flashzilla_app::Runtime;
use flashzilla_core::{CardId, Environment, SessionConfig};
use flashzilla_store::{CardPool, CardStore, FileStore};

use crate::{RuntimeError, TerminalDriver};

/// Run an interactive review session against `store`.
pub async fn review<E: Environment>(
    store: FileStore,
    env: E,
    config: SessionConfig,
) -> Result<(), RuntimeError> {
    tracing::info!(deck = %store.path().display(), secs = config.duration_secs, "review");
    let driver = TerminalDriver::new(store, config.tick_interval)?;
    Runtime::new(driver, env, config).run().await?;
    Ok(())
}

/// Add a card at the head of the deck. It is reviewed last.
pub fn add<S: CardStore, E: Environment>(
    store: &S,
    env: E,
    prompt: &str,
    answer: &str,
) -> Result<CardId, RuntimeError> {
    let mut pool = CardPool::from_cards(env, store.load()?)?;
    let id = pool.add(prompt, answer)?;
    store.save(pool.cards())?;
    tracing::info!(%id, "card added");
    Ok(id)
}

/// Remove cards by position as shown by [`list`]. Returns how many went.
pub fn remove<S: CardStore, E: Environment>(
    store: &S,
    env: E,
    positions: &[usize],
) -> Result<usize, RuntimeError> {
    let mut pool = CardPool::from_cards(env, store.load()?)?;
    let removed = pool.remove_at(positions);
    if removed > 0 {
        store.save(pool.cards())?;
    }
    tracing::info!(removed, left = pool.len(), "cards removed");
    Ok(removed)
}

/// Write one line per card: position, prompt and answer, tab separated.
///
/// Tabs, line breaks and backslashes inside a field are written as `\t`,
/// `\n`, `\r` and `\\` so every card stays on its own line.
pub fn list<S: CardStore>(store: &S, out: &mut impl Write) -> Result<usize, RuntimeError> {
    let cards = store.load()?;
    for (position, card) in cards.iter().enumerate() {
        let (prompt, answer) = (escape_field(card.prompt()), escape_field(card.answer()));
        writeln!(out, "{position}\t{prompt}\t{answer}")?;
    }
    Ok(cards.len())
}

fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}
