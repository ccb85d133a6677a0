//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod card;
mod status;

use flashzilla_app::App;
use flashzilla_core::Environment;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the entire UI.
pub fn render<E: Environment>(frame: &mut Frame, app: &App<E>) {
    const CARD_MIN_HEIGHT: u16 = 5;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(CARD_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [card_area, status_area] = chunks.as_ref() else {
        return;
    };

    card::render(frame, app, *card_area);
    status::render(frame, app, *status_area);
}
