//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard and focus events and ratatui for rendering. Ticks come from a
//! tokio interval; the card pool lives in a JSON file.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableFocusChange, EnableFocusChange, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flashzilla_app::{App, AppEvent, Driver, KeyInput};
use flashzilla_core::{Card, Environment};
use flashzilla_store::{CardStore, FileStore, StoreError};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Card pool could not be read or written.
    #[error("card store error: {0}")]
    Store(#[from] StoreError),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui) and the session
/// clock (tokio interval). Restores the terminal on [`Driver::stop`] or drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    ticks: Interval,
    store: FileStore,
    restored: bool,
}

impl TerminalDriver {
    /// Take over the terminal.
    ///
    /// The first tick fires one `tick_interval` after creation.
    pub fn new(store: FileStore, tick_interval: Duration) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?.execute(EnableFocusChange)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        let mut ticks = tokio::time::interval_at(Instant::now() + tick_interval, tick_interval);
        // A suspended process must not replay the ticks it missed.
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(Self { terminal, event_stream: EventStream::new(), ticks, store, restored: false })
    }

    /// Convert crossterm `KeyEvent` to `KeyInput`.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyInput::Esc)
            },
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            _ => None,
        }
    }

    /// Convert a terminal event into an App event, if it carries one.
    pub fn convert_event(event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) => Self::convert_key(key).map(AppEvent::Key),
            Event::FocusGained => Some(AppEvent::Foreground(true)),
            Event::FocusLost => Some(AppEvent::Foreground(false)),
            Event::Resize(..) => Some(AppEvent::Redraw),
            _ => None,
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        stdout().execute(DisableFocusChange)?.execute(LeaveAlternateScreen)?;
        disable_raw_mode()
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                biased;

                // Terminal events
                maybe_event = self.event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(app_event) = Self::convert_event(event) {
                                return Ok(Some(app_event));
                            }
                        },
                        Some(Err(e)) => return Err(TerminalError::Io(e)),
                        None => return Ok(None),
                    }
                }

                // Session clock
                _ = self.ticks.tick() => return Ok(Some(AppEvent::Tick)),
            }
        }
    }

    fn load_pool(&mut self) -> Result<Vec<Card>, Self::Error> {
        Ok(self.store.load()?)
    }

    fn save_pool(&mut self, cards: &[Card]) -> Result<(), Self::Error> {
        Ok(self.store.save(cards)?)
    }

    fn render<E: Environment>(&mut self, app: &App<E>) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("Failed to restore terminal: {e}");
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn focus_maps_to_foreground() {
        assert!(matches!(
            TerminalDriver::convert_event(Event::FocusLost),
            Some(AppEvent::Foreground(false))
        ));
        assert!(matches!(
            TerminalDriver::convert_event(Event::FocusGained),
            Some(AppEvent::Foreground(true))
        ));
    }

    #[test]
    fn ctrl_c_quits() {
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(
            TerminalDriver::convert_event(event),
            Some(AppEvent::Key(KeyInput::Esc))
        ));
    }

    #[test]
    fn releases_and_unbound_keys_are_dropped() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(TerminalDriver::convert_event(release).is_none());
        assert!(TerminalDriver::convert_event(key(KeyCode::Up, KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn resize_requests_redraw() {
        assert!(matches!(
            TerminalDriver::convert_event(Event::Resize(80, 24)),
            Some(AppEvent::Redraw)
        ));
    }
}
