//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during system execution.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible execution paths.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from a session into a
//! [`SessionSnapshot`] after every rendered change, appends it to a
//! [`SnapshotHistory`], then runs registered [`Invariant`] checks against
//! the history.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! history.record(SessionSnapshot::capture(app.session()));
//! registry.check_all(&history)?;
//! ```

mod checks;
mod snapshot;

pub use checks::{
    ClockMonotonic, CompleteIsTerminal, CompletionConsistent, TailOnlyActive, UniqueCardIds,
};
pub use snapshot::{SessionSnapshot, SnapshotHistory};

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies which invariant was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// Only the deck tail is interactive.
    TailOnlyActive,
    /// Pending ids are unique.
    UniqueCardIds,
    /// Remaining time never increases within a generation.
    ClockMonotonic,
    /// Complete sessions stay complete until reset.
    CompleteIsTerminal,
    /// Empty deck or expired clock implies complete.
    CompletionConsistent,
}

impl std::fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Which invariant was violated.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against observed session history.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant identifier for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against the observed history.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, history: &SnapshotHistory) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against observed history.
/// Use [`InvariantRegistry::standard()`] for the session invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard session invariants.
    ///
    /// Includes:
    /// - [`TailOnlyActive`]: only the tail is interactive
    /// - [`UniqueCardIds`]: pending ids are unique
    /// - [`ClockMonotonic`]: remaining never increases within a generation
    /// - [`CompleteIsTerminal`]: complete stays complete until reset
    /// - [`CompletionConsistent`]: empty deck or zero time means complete
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(TailOnlyActive);
        registry.add(UniqueCardIds);
        registry.add(ClockMonotonic);
        registry.add(CompleteIsTerminal);
        registry.add(CompletionConsistent);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given history.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, history: &SnapshotHistory) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(history).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
