//! Review session engine for Flashzilla.
//!
//! Pure, synchronous state machines that decide which card is shown, when
//! input is accepted and how the deck evolves until the session completes.
//! No I/O: the host feeds ticks, foreground signals and outcomes, and reads
//! derived state back.
//!
//! # Components
//!
//! - [`Card`]: prompt/answer pair under an opaque [`CardId`]
//! - [`Deck`]: tail-consumed queue with FIFO retry
//! - [`SessionClock`]: countdown gated by an activity signal
//! - [`Session`]: composition root and lifecycle state machine
//! - [`Environment`]: randomness used to mint card ids

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod card;
pub mod clock;
pub mod config;
pub mod deck;
pub mod env;
pub mod error;
pub mod outcome;
pub mod session;

pub use card::{Card, CardId, find_duplicate_id};
pub use clock::SessionClock;
pub use config::SessionConfig;
pub use deck::Deck;
pub use env::Environment;
pub use error::SessionError;
pub use outcome::{Outcome, classify_swipe};
pub use session::{Resolution, Session, SessionState};
