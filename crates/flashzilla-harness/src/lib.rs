//! Deterministic simulation harness for Flashzilla review sessions.
//!
//! Seeded implementations of the Environment and Driver traits for
//! deterministic, reproducible testing of the session engine and the app
//! runtime.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation for model-based
//! testing. Operations are applied to both the model and real implementation,
//! and their observable states are compared.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the session
//! invariants.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod invariants;
pub mod model;
pub mod sim_driver;
pub mod sim_env;

pub use invariants::{
    ClockMonotonic, CompleteIsTerminal, CompletionConsistent, Invariant, InvariantKind,
    InvariantRegistry, InvariantResult, SessionSnapshot, SnapshotHistory, TailOnlyActive,
    UniqueCardIds, Violation,
};
pub use model::{ModelSession, ObservableState, Operation, SmallCard, apply_to_session};
pub use sim_driver::{SimDriver, SimDriverError};
pub use sim_env::SimEnv;
