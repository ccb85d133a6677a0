//! Operations for model-based testing.
//!
//! Operations represent every input the session engine accepts. They are
//! generated randomly by proptest (or by the fuzzer through
//! [`arbitrary::Arbitrary`]) and applied to both the model and the real
//! implementation.

use arbitrary::Arbitrary;
use flashzilla_core::{Card, Environment, Outcome};

/// Card content small enough to keep the search space manageable.
///
/// Content repeats freely; identity comes from the ids the real system mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct SmallCard {
    /// Prompt discriminator.
    pub prompt: u8,
    /// Answer discriminator.
    pub answer: u8,
}

impl SmallCard {
    /// Prompt and answer text.
    pub fn content(&self) -> (String, String) {
        (format!("prompt {}", self.prompt), format!("answer {}", self.answer))
    }

    /// Build a real card with a fresh id.
    pub fn to_card<E: Environment>(&self, env: &E) -> Card {
        let (prompt, answer) = self.content();
        Card::new(env, prompt, answer)
    }
}

/// Inputs that can be applied to a session.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// One second elapsed.
    Tick,

    /// Host moved to the foreground (`true`) or background (`false`).
    Foreground(bool),

    /// User judged the active card.
    Outcome {
        /// `true` retires the card, `false` requeues it.
        correct: bool,
    },

    /// Start over from a snapshot of the pool.
    Reset(Vec<SmallCard>),
}

impl Operation {
    /// Outcome carried by an [`Operation::Outcome`].
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Outcome { correct } => Some(Outcome::from(*correct)),
            _ => None,
        }
    }
}
