//! Card area
//!
//! Displays the top card, or the end-of-session summary.

use flashzilla_app::App;
use flashzilla_core::{Environment, SessionState};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the card area.
pub fn render<E: Environment>(frame: &mut Frame, app: &App<E>, area: Rect) {
    let title = match app.state() {
        SessionState::Paused => " Paused ".to_string(),
        _ => format!(" Time: {} ", app.remaining_secs()),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let lines = match (app.state(), app.top_card()) {
        (SessionState::Idle, _) => vec![dim("Loading cards...")],
        (SessionState::Complete, _) | (_, None) => {
            vec![Line::from(Span::styled(
                "Session over",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))]
        },
        (_, Some(card)) => {
            let mut lines = vec![Line::from(Span::styled(
                card.prompt().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            lines.push(Line::default());
            if app.is_revealed() {
                lines.push(Line::from(Span::styled(
                    card.answer().to_string(),
                    Style::default().fg(Color::Cyan),
                )));
            } else {
                lines.push(dim("space to reveal"));
            }
            lines
        },
    };

    let paragraph =
        Paragraph::new(lines).block(block).alignment(Alignment::Center).wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn dim(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}
