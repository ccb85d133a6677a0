//! Countdown clock gated by an activity signal.
//!
//! The clock knows nothing about cards. Whoever owns it decides whether the
//! deck still has work in it and passes that in through
//! [`SessionClock::set_activity`].

/// Session countdown.
///
/// # Invariants
///
/// - `remaining` never increases except through [`SessionClock::start`].
/// - `remaining` only decreases while running, one unit per tick, and
///   never below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionClock {
    remaining: u32,
    running: bool,
}

impl SessionClock {
    /// Stopped clock with no time on it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the countdown to `initial_secs` and start running.
    ///
    /// A zero duration leaves the clock stopped rather than running. This is
    /// not observable: `tick` never counts below zero and a zero-length
    /// session completes on reset.
    pub fn start(&mut self, initial_secs: u32) {
        self.remaining = initial_secs;
        self.running = initial_secs > 0;
    }

    /// Advance one unit. Returns `true` if `remaining` decreased.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
        }
        true
    }

    /// Recompute `running` from the three signals that may suspend counting.
    pub fn set_activity(&mut self, is_foreground: bool, deck_not_empty: bool) {
        self.running = is_foreground && self.remaining > 0 && deck_not_empty;
    }

    /// Stop counting, keeping `remaining`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// True while the countdown is advancing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the countdown reached zero.
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}
