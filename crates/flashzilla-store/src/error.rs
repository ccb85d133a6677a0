//! Error types for card pool storage.

use std::io;

use flashzilla_core::CardId;
use thiserror::Error;

/// Errors from loading, saving or editing the card pool.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the pool file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The pool file is not a valid card list.
    #[error("malformed card pool: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stored cards share an id.
    #[error("card pool contains duplicate id {id}")]
    DuplicateCardId {
        /// The repeated id.
        id: CardId,
    },

    /// A new card has an empty prompt or answer after trimming.
    #[error("card {field} must not be empty")]
    EmptyField {
        /// `"prompt"` or `"answer"`.
        field: &'static str,
    },

    /// No card with this id.
    #[error("card {id} not found")]
    NotFound {
        /// The missing id.
        id: CardId,
    },
}

impl StoreError {
    /// Returns true if the error came from the storage medium rather than
    /// the pool contents.
    ///
    /// Medium errors may succeed on retry; content errors never will.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
