//! Review outcomes and swipe classification.
//!
//! The engine only consumes an [`Outcome`]. Hosts that recognise drag
//! gestures reduce the final horizontal translation to one with
//! [`classify_swipe`]; accessible controls submit an outcome directly.

/// The user's verdict on the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Answered correctly. The card is retired.
    Correct,
    /// Answered incorrectly. The card is requeued under a new id.
    Wrong,
}

impl Outcome {
    /// `true` for [`Outcome::Correct`].
    pub fn is_success(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl From<bool> for Outcome {
    fn from(success: bool) -> Self {
        if success { Self::Correct } else { Self::Wrong }
    }
}

/// Classify a finished horizontal drag.
///
/// Returns `None` when `|dx|` does not exceed `threshold`; the card snaps
/// back and nothing is submitted. A rightward drag is correct, leftward is
/// wrong. Non-finite input never classifies.
pub fn classify_swipe(dx: f32, threshold: f32) -> Option<Outcome> {
    if !dx.is_finite() || dx.abs() <= threshold {
        return None;
    }
    Some(if dx > 0.0 { Outcome::Correct } else { Outcome::Wrong })
}
