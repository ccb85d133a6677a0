//! Binary-level errors.

use std::io;

use flashzilla_store::StoreError;
use thiserror::Error;

use crate::TerminalError;

/// Errors surfaced by the `flashzilla` commands.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Terminal setup, input or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] TerminalError),

    /// Deck file could not be read, written or edited.
    #[error("deck error: {0}")]
    Store(#[from] StoreError),

    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
