//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`flashzilla_app::Runtime`] orchestration code runs in both production and
//! simulation.

use std::{
    collections::VecDeque,
    future::Future,
    sync::{Arc, Mutex, MutexGuard},
};

use flashzilla_app::{App, AppEvent, Driver};
use flashzilla_core::{Card, Environment};
use flashzilla_store::{CardStore, MemoryStore, StoreError};

use crate::invariants::{InvariantRegistry, SessionSnapshot, SnapshotHistory, Violation};

/// Error type for simulation driver.
#[derive(Debug)]
pub enum SimDriverError {
    /// The in-memory pool rejected a load or save.
    Store(StoreError),
    /// A rendered state broke one or more invariants.
    Invariants(Vec<Violation>),
}

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "SimDriverError: store: {err}"),
            Self::Invariants(violations) => {
                write!(f, "SimDriverError: {} invariant violation(s)", violations.len())?;
                for violation in violations {
                    write!(f, "\n  {violation}")?;
                }
                Ok(())
            },
        }
    }
}

impl std::error::Error for SimDriverError {}

impl From<StoreError> for SimDriverError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Shared state for event injection.
///
/// This allows injection while the runtime owns the driver.
#[derive(Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    history: SnapshotHistory,
    renders: usize,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Events are scripted through [`SimDriver::inject_event`] and replayed in
/// order; the pool lives in a [`MemoryStore`]. Every render records a
/// [`SessionSnapshot`] and, when enabled, checks the invariants over the
/// whole history so far.
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    store: MemoryStore,
    invariants: Option<InvariantRegistry>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a simulation driver with an empty pool.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Create a simulation driver backed by `store`.
    pub fn with_store(store: MemoryStore) -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())), store, invariants: None }
    }

    /// Enable invariant checking.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.lock().pending_events.push_back(event);
    }

    /// Inject `count` tick events.
    pub fn inject_ticks(&self, count: usize) {
        let mut state = self.lock();
        state.pending_events.extend(std::iter::repeat_n(AppEvent::Tick, count));
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.lock().pending_events.is_empty()
    }

    /// Snapshots recorded at each render.
    pub fn history(&self) -> SnapshotHistory {
        self.lock().history.clone()
    }

    /// Number of renders so far.
    pub fn render_count(&self) -> usize {
        self.lock().renders
    }

    /// True once the runtime released the driver.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    /// Backing card pool.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned (a thread panicked while
    /// holding the lock). This is acceptable for test/simulation code.
    #[allow(clippy::expect_used)]
    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().expect("Mutex poisoned")
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send {
        let event = self.lock().pending_events.pop_front();
        std::future::ready(Ok(event))
    }

    fn load_pool(&mut self) -> Result<Vec<Card>, Self::Error> {
        Ok(self.store.load()?)
    }

    fn save_pool(&mut self, cards: &[Card]) -> Result<(), Self::Error> {
        Ok(self.store.save(cards)?)
    }

    fn render<E: Environment>(&mut self, app: &App<E>) -> Result<(), Self::Error> {
        let snapshot = SessionSnapshot::capture(app.session());
        tracing::trace!(?snapshot, "render");

        let mut state = self.lock();
        state.renders += 1;
        state.history.record(snapshot);

        match &self.invariants {
            Some(registry) => {
                registry.check_all(&state.history).map_err(SimDriverError::Invariants)
            },
            None => Ok(()),
        }
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}
