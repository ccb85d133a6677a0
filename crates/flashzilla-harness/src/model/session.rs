//! Reference session.
//!
//! Tracks the queue as plain content with no ids, no clock object and no
//! environment. Every rule is written as directly as possible so divergence
//! points at the real engine.

use std::collections::VecDeque;

use flashzilla_core::SessionState;

use super::operation::{Operation, SmallCard};

/// Observable state shared by the model and the real engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Lifecycle state.
    pub state: SessionState,
    /// Seconds left.
    pub remaining_secs: u32,
    /// Pending content, head first.
    pub queue: Vec<(String, String)>,
    /// Content of the card eligible for an outcome.
    pub active: Option<(String, String)>,
}

/// Reference implementation of the review session.
#[derive(Debug, Clone)]
pub struct ModelSession {
    duration_secs: u32,
    /// Head at the front, active card at the back.
    queue: VecDeque<SmallCard>,
    state: SessionState,
    remaining_secs: u32,
    foreground: bool,
}

impl ModelSession {
    /// Idle session using `duration_secs` on every reset.
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            queue: VecDeque::new(),
            state: SessionState::Idle,
            remaining_secs: 0,
            foreground: true,
        }
    }

    /// Apply one operation.
    pub fn apply(&mut self, op: &Operation) {
        match op {
            Operation::Tick => self.tick(),
            Operation::Foreground(is_foreground) => self.foreground(*is_foreground),
            Operation::Outcome { correct } => self.outcome(*correct),
            Operation::Reset(cards) => self.reset(cards),
        }
    }

    fn reset(&mut self, cards: &[SmallCard]) {
        self.queue = cards.iter().copied().collect();
        self.remaining_secs = self.duration_secs;
        self.foreground = true;
        self.state = if self.queue.is_empty() || self.remaining_secs == 0 {
            SessionState::Complete
        } else {
            SessionState::Active
        };
    }

    fn tick(&mut self) {
        if self.state != SessionState::Active {
            return;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.state = SessionState::Complete;
        }
    }

    fn foreground(&mut self, is_foreground: bool) {
        self.foreground = is_foreground;
        if matches!(self.state, SessionState::Active | SessionState::Paused) {
            self.state = if is_foreground { SessionState::Active } else { SessionState::Paused };
        }
    }

    fn outcome(&mut self, correct: bool) {
        if self.state != SessionState::Active {
            return;
        }
        let Some(card) = self.queue.pop_back() else {
            return;
        };
        if !correct {
            self.queue.push_front(card);
        }
        if self.queue.is_empty() {
            self.state = SessionState::Complete;
        }
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Last foreground signal.
    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    /// Observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        let queue: Vec<_> = self.queue.iter().map(SmallCard::content).collect();
        let active = if self.state == SessionState::Active { queue.last().cloned() } else { None };
        ObservableState { state: self.state, remaining_secs: self.remaining_secs, queue, active }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(n: u8) -> SmallCard {
        SmallCard { prompt: n, answer: n }
    }

    #[test]
    fn wrong_answer_moves_card_to_head() {
        let mut model = ModelSession::new(10);
        model.apply(&Operation::Reset(vec![card(1), card(2), card(3)]));
        model.apply(&Operation::Outcome { correct: false });

        let obs = model.observable_state();
        assert_eq!(obs.queue, vec![card(3).content(), card(1).content(), card(2).content()]);
        assert_eq!(obs.active, Some(card(2).content()));
    }

    #[test]
    fn paused_model_ignores_ticks() {
        let mut model = ModelSession::new(2);
        model.apply(&Operation::Reset(vec![card(1)]));
        model.apply(&Operation::Foreground(false));
        model.apply(&Operation::Tick);

        assert_eq!(model.state(), SessionState::Paused);
        assert_eq!(model.observable_state().remaining_secs, 2);
        assert!(!model.is_foreground());
    }
}
