//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: session state machine
//! - [`Driver`]: platform-specific I/O
//!
//! Events are funneled through a single loop and handled to completion one
//! at a time, so the session never sees overlapping calls.

use flashzilla_core::{Environment, SessionConfig};

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `E`: Environment used to mint card ids
pub struct Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    driver: D,
    app: App<E>,
}

impl<D, E> Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    /// Create a new runtime with the given driver and environment.
    pub fn new(driver: D, env: E, config: SessionConfig) -> Self {
        Self { driver, app: App::new(env, config) }
    }

    /// Run the main event loop until the App quits or input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to poll or render.
    pub async fn run(mut self) -> Result<(), D::Error> {
        if !self.start()? {
            loop {
                if self.step().await? {
                    break;
                }
            }
        }

        tracing::info!(state = ?self.app.state(), "runtime stopped");
        self.driver.stop();
        Ok(())
    }

    /// Load the stored pool and render the first card.
    ///
    /// Returns `true` if the application should quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to render.
    pub fn start(&mut self) -> Result<bool, D::Error> {
        tracing::info!("runtime starting");
        self.process_actions(vec![AppAction::LoadPool])
    }

    /// Process one event from the driver.
    ///
    /// Returns `true` if the application should quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to poll or render.
    pub async fn step(&mut self) -> Result<bool, D::Error> {
        let Some(event) = self.driver.poll_event().await? else {
            tracing::debug!("input exhausted");
            return Ok(true);
        };

        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Storage results are fed back to the App as events, which may produce
    /// further actions. Returns `true` if should quit.
    fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::LoadPool => {
                        let event = match self.driver.load_pool() {
                            Ok(cards) => AppEvent::PoolLoaded(cards),
                            Err(e) => {
                                tracing::warn!("Failed to load card pool: {e}");
                                AppEvent::Error { message: format!("couldn't load cards: {e}") }
                            },
                        };
                        pending_actions.extend(self.app.handle(event));
                    },
                    AppAction::SavePool(cards) => {
                        let event = match self.driver.save_pool(&cards) {
                            Ok(()) => AppEvent::PoolSaved,
                            Err(e) => {
                                tracing::warn!("Failed to save card pool: {e}");
                                AppEvent::Error { message: format!("couldn't save cards: {e}") }
                            },
                        };
                        pending_actions.extend(self.app.handle(event));
                    },
                }
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App<E> {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
