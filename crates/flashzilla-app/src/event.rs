//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive
//! the [`crate::App`] state machine.
//!
//! Events originate from three sources:
//! - User interactions (keys, swipes, accessible outcome buttons).
//! - The host platform (ticks, foreground/background transitions).
//! - Storage results delivered back by the runtime.

use flashzilla_core::{Card, Outcome};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// One clock unit elapsed.
    Tick,

    /// Host visibility changed. `true` when visible and interactive.
    Foreground(bool),

    /// Output surface changed and must be repainted.
    Redraw,

    /// A drag on the active card ended.
    Swipe {
        /// Final horizontal translation. Positive is rightward.
        dx: f32,
    },

    /// Outcome from an accessible control.
    Outcome(Outcome),

    /// Start again with the stored pool.
    ///
    /// Ignored while a session is running or paused, like the `r` key.
    Reset,

    /// Card pool read from storage.
    PoolLoaded(Vec<Card>),

    /// Card pool edited outside the session.
    PoolEdited(Vec<Card>),

    /// Edited pool written to storage.
    PoolSaved,

    /// Error occurred.
    Error {
        /// Error description.
        message: String,
    },
}
