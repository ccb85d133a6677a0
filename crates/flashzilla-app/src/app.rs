//! Application state machine.
//!
//! This module defines the [`App`] state machine, which wraps the review
//! [`Session`] with the presentation concerns the engine does not own:
//! answer reveal, key bindings, swipe classification and status messages.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.

use flashzilla_core::{
    Card, Environment, Outcome, Session, SessionConfig, SessionState, classify_swipe,
};

use crate::{AppAction, AppEvent, KeyInput};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App<E: Environment> {
    /// Review engine.
    session: Session<E>,
    /// Answer of the top card is visible.
    revealed: bool,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl<E: Environment> App<E> {
    /// Create an App with an idle session.
    pub fn new(env: E, config: SessionConfig) -> Self {
        Self { session: Session::new(env, config), revealed: false, status_message: None }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => {
                let before = (self.session.state(), self.session.remaining_secs());
                self.session.on_tick();
                if before == (self.session.state(), self.session.remaining_secs()) {
                    return vec![];
                }
                if self.session.is_complete() {
                    self.status_message = Some("Time's up".into());
                }
                vec![AppAction::Render]
            },
            AppEvent::Foreground(is_foreground) => {
                let before = self.session.state();
                if self.session.on_foreground_change(is_foreground) == before {
                    vec![]
                } else {
                    vec![AppAction::Render]
                }
            },
            AppEvent::Redraw => vec![AppAction::Render],
            AppEvent::Swipe { dx } => {
                match classify_swipe(dx, self.session.config().swipe_threshold) {
                    Some(outcome) => self.submit(outcome),
                    // Card snaps back to the stack
                    None => vec![AppAction::Render],
                }
            },
            AppEvent::Outcome(outcome) => self.submit(outcome),
            AppEvent::Reset if self.can_restart() => self.restart(),
            // A live session is not interrupted
            AppEvent::Reset => vec![],
            AppEvent::PoolLoaded(cards) => {
                match self.session.reset(cards) {
                    Ok(SessionState::Complete) if self.session.deck().is_empty() => {
                        self.revealed = false;
                        self.status_message = Some("No cards yet".into());
                    },
                    Ok(_) => {
                        self.revealed = false;
                        self.status_message = None;
                    },
                    Err(err) => {
                        self.status_message = Some(format!("Couldn't start session: {err}"));
                    },
                }
                vec![AppAction::Render]
            },
            AppEvent::PoolEdited(cards) => vec![AppAction::SavePool(cards)],
            // Restart only once the edit is durable
            AppEvent::PoolSaved => self.restart(),
            AppEvent::Error { message } => {
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char(' ') | KeyInput::Enter => self.toggle_reveal(),
            KeyInput::Right | KeyInput::Char('l') => self.submit(Outcome::Correct),
            KeyInput::Left | KeyInput::Char('h') => self.submit(Outcome::Wrong),
            KeyInput::Char('r') if self.can_restart() => self.restart(),
            KeyInput::Char('q') | KeyInput::Esc => self.quit(),
            KeyInput::Char(_) => vec![],
        }
    }

    /// Submit an outcome for the active card.
    ///
    /// No-op unless the session accepts input.
    pub fn submit(&mut self, outcome: Outcome) -> Vec<AppAction> {
        if self.session.submit_outcome(outcome).is_none() {
            return vec![];
        }
        self.revealed = false;
        if self.session.is_complete() {
            self.status_message = Some("All cards done".into());
        }
        vec![AppAction::Render]
    }

    /// Show or hide the answer of the active card.
    ///
    /// No-op unless the session accepts input.
    pub fn toggle_reveal(&mut self) -> Vec<AppAction> {
        if !self.session.accepts_input() {
            return vec![];
        }
        self.revealed = !self.revealed;
        vec![AppAction::Render]
    }

    /// Start again from the stored pool.
    pub fn restart(&self) -> Vec<AppAction> {
        vec![AppAction::LoadPool]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Review engine.
    pub fn session(&self) -> &Session<E> {
        &self.session
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Seconds left on the clock.
    pub fn remaining_secs(&self) -> u32 {
        self.session.remaining_secs()
    }

    /// Top card of the stack, interactive or not. `None` once the deck is
    /// empty.
    pub fn top_card(&self) -> Option<&Card> {
        self.session.deck().active_card()
    }

    /// Number of cards still pending.
    pub fn pending_count(&self) -> usize {
        self.session.deck().len()
    }

    /// Answer of the top card is visible.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// True when a restart is offered (idle or finished session).
    pub fn can_restart(&self) -> bool {
        matches!(self.session.state(), SessionState::Idle | SessionState::Complete)
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
