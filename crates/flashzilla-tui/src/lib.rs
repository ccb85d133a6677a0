//! Terminal UI for Flashzilla
//!
//! A thin shell over [`flashzilla_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic
//! [`flashzilla_app::Runtime`].
//!
//! This crate handles terminal rendering, the deck file and the deck editing
//! commands.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
mod error;
pub mod system_env;
pub mod terminal;
pub mod ui;

pub use error::RuntimeError;
pub use flashzilla_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use system_env::SystemEnv;
pub use terminal::{TerminalDriver, TerminalError};
