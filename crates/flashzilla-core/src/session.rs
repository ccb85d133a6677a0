//! Review session state machine.
//!
//! [`Session`] composes a [`Deck`] and a [`SessionClock`] and is the only
//! thing the host talks to. Every entry point is synchronous and total: it
//! either applies cleanly or is a no-op, which lets late or duplicated UI
//! events (a second tap on an accessibility button after the deck emptied)
//! arrive without harm.
//!
//! # State Machine
//!
//! ```text
//! ┌──────┐  reset   ┌────────┐  background  ┌────────┐
//! │ Idle │─────────>│ Active │─────────────>│ Paused │
//! └──────┘          └────────┘<─────────────└────────┘
//!                        │       foreground
//!                        │ deck empty / time up
//!                        ↓
//!                   ┌──────────┐
//!                   │ Complete │──── reset ───> Active
//!                   └──────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    card::{Card, CardId},
    clock::SessionClock,
    config::SessionConfig,
    deck::Deck,
    env::Environment,
    error::SessionError,
    outcome::Outcome,
};

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No snapshot loaded yet.
    Idle,
    /// Cards pending, clock running, outcomes accepted.
    Active,
    /// Cards pending, clock suspended because the host is in the background.
    Paused,
    /// Deck empty or time up. Terminal until the next reset.
    Complete,
}

/// What an accepted outcome did to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The active card was removed for good.
    Retired {
        /// Id of the retired card.
        id: CardId,
    },
    /// The active card was replaced by a copy at the head of the queue.
    Requeued {
        /// Id of the failed card, now gone.
        from: CardId,
        /// Id of the reissued copy.
        to: CardId,
    },
}

/// The review engine.
///
/// Owns its deck and clock exclusively; collaborators read derived values
/// and feed events one at a time.
#[derive(Debug, Clone)]
pub struct Session<E: Environment> {
    env: E,
    config: SessionConfig,
    deck: Deck,
    clock: SessionClock,
    state: SessionState,
    /// Last foreground signal from the host.
    foreground: bool,
    /// Number of successful resets.
    generation: u64,
}

impl<E: Environment> Session<E> {
    /// Create an idle session. Nothing happens until [`Session::reset`].
    pub fn new(env: E, config: SessionConfig) -> Self {
        Self {
            env,
            config,
            deck: Deck::new(),
            clock: SessionClock::new(),
            state: SessionState::Idle,
            foreground: true,
            generation: 0,
        }
    }

    /// Start a new session from `cards`.
    ///
    /// Loads the deck, restarts the clock at the configured duration and
    /// enters [`SessionState::Active`]. A reset is a user action, so the host
    /// is assumed to be in the foreground. An empty snapshot or a zero
    /// duration goes straight to [`SessionState::Complete`].
    ///
    /// # Errors
    ///
    /// - `SessionError::DuplicateCardId` if the snapshot repeats an id. The
    ///   session is left exactly as it was.
    pub fn reset(&mut self, cards: Vec<Card>) -> Result<SessionState, SessionError> {
        if let Err(err) = self.deck.load(cards) {
            tracing::warn!(%err, "rejected session snapshot");
            return Err(err);
        }

        self.generation += 1;
        self.foreground = true;
        self.clock.start(self.config.duration_secs);
        self.clock.set_activity(self.foreground, !self.deck.is_empty());

        let next = if self.clock.is_running() {
            SessionState::Active
        } else {
            self.clock.stop();
            SessionState::Complete
        };
        tracing::debug!(
            generation = self.generation,
            cards = self.deck.len(),
            secs = self.clock.remaining(),
            "session reset"
        );
        self.transition(next);
        Ok(self.state)
    }

    /// Apply the user's verdict to the active card.
    ///
    /// Only valid while [`SessionState::Active`]; anything else, or an empty
    /// deck, is a silent no-op returning `None`.
    pub fn submit_outcome(&mut self, outcome: Outcome) -> Option<Resolution> {
        if self.state != SessionState::Active {
            tracing::debug!(?outcome, state = ?self.state, "outcome ignored");
            return None;
        }
        let id = self.deck.active_card()?.id();

        let resolution = match outcome {
            Outcome::Correct => {
                self.deck.retire(id).map(|card| Resolution::Retired { id: card.id() })
            },
            Outcome::Wrong => {
                self.deck.requeue(id, &self.env).map(|to| Resolution::Requeued { from: id, to })
            },
        };
        tracing::debug!(?resolution, pending = self.deck.len(), "outcome applied");

        if self.deck.is_empty() {
            self.clock.stop();
            self.transition(SessionState::Complete);
        }
        resolution
    }

    /// Host visibility changed.
    ///
    /// Moves between [`SessionState::Active`] and [`SessionState::Paused`].
    /// Never leaves [`SessionState::Idle`] or [`SessionState::Complete`].
    pub fn on_foreground_change(&mut self, is_foreground: bool) -> SessionState {
        self.foreground = is_foreground;

        match self.state {
            SessionState::Idle | SessionState::Complete => {},
            SessionState::Active | SessionState::Paused => {
                self.clock.set_activity(is_foreground, !self.deck.is_empty());
                if self.clock.is_running() {
                    self.transition(SessionState::Active);
                } else {
                    self.transition(SessionState::Paused);
                }
            },
        }
        self.state
    }

    /// One unit of time elapsed.
    ///
    /// Reaching zero completes the session even if cards remain.
    pub fn on_tick(&mut self) -> SessionState {
        if self.state == SessionState::Active && self.clock.tick() && self.clock.is_expired() {
            tracing::debug!(pending = self.deck.len(), "time up");
            self.transition(SessionState::Complete);
        }
        self.state
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "session state");
            self.state = next;
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True once the deck emptied or time ran out.
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    /// True while outcomes are accepted.
    pub fn accepts_input(&self) -> bool {
        self.state == SessionState::Active
    }

    /// The card eligible for an outcome.
    ///
    /// `None` whenever input is not accepted, even if cards remain. Use
    /// [`Deck::active_card`] through [`Session::deck`] to display the top
    /// card of a paused or expired session.
    pub fn active_card(&self) -> Option<&Card> {
        if self.accepts_input() { self.deck.active_card() } else { None }
    }

    /// Read-only view of the queue.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Seconds left on the clock.
    pub fn remaining_secs(&self) -> u32 {
        self.clock.remaining()
    }

    /// True while the clock is counting.
    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Last foreground signal received.
    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    /// Number of successful resets. Zero while idle.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Environment used to mint card ids.
    pub fn env(&self) -> &E {
        &self.env
    }
}
