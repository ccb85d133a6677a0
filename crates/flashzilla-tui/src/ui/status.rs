//! Status bar
//!
//! Displays cards left, the latest status message and the key hints that
//! apply right now.

use flashzilla_app::App;
use flashzilla_core::Environment;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render<E: Environment>(frame: &mut Frame, app: &App<E>, area: Rect) {
    let count = match app.pending_count() {
        1 => "1 card left".to_string(),
        n => format!("{n} cards left"),
    };

    let hints = if app.can_restart() {
        "r restart | q quit"
    } else {
        "←/h wrong | →/l correct | q quit"
    };

    let mut spans = vec![Span::raw(" "), Span::raw(count)];
    if let Some(message) = app.status_message() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(format!(" | {hints}"), Style::default().fg(Color::Gray)));

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
