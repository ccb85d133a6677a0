//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific input, storage and rendering, while the generic
//! [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use flashzilla_core::{Card, Environment};

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal frontend and in
/// simulation.
///
/// # Implementations
///
/// - **TUI**: crossterm for keys and focus, a tokio interval for ticks, a
///   JSON file for the card pool
/// - **Simulation**: scripted event queue and an in-memory card pool
///
/// Events are delivered one at a time in arrival order; the driver never
/// reorders them.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` once the input source is exhausted, which ends the
    /// runtime loop.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Read the stored card pool.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read. The runtime reports it to
    /// the App and keeps the current session.
    fn load_pool(&mut self) -> Result<Vec<Card>, Self::Error>;

    /// Replace the stored card pool.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    fn save_pool(&mut self, cards: &[Card]) -> Result<(), Self::Error>;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render<E: Environment>(&mut self, app: &App<E>) -> Result<(), Self::Error>;

    /// Release platform resources.
    fn stop(&mut self);
}
