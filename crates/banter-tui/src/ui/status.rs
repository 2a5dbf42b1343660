//! Status bar
//!
//! Displays connection status, the local user id, and drop counters.

use banter_core::{ConnectionState, DropStats};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.snapshot();

    let connection = Span::styled(
        snapshot.connection_state.to_string(),
        connection_style(snapshot.connection_state),
    );

    let user = if snapshot.user_id.is_empty() {
        String::new()
    } else {
        format!(" | user: {}", snapshot.user_id)
    };

    let mut spans =
        vec![Span::raw(" "), connection, Span::styled(user, Style::default().fg(Color::DarkGray))];
    if let Some(drops) = drops_label(snapshot.drops) {
        spans.push(Span::styled(format!(" | {drops}"), Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Color for each connection state.
fn connection_style(state: ConnectionState) -> Style {
    match state {
        ConnectionState::NotStarted => Style::default().fg(Color::Gray),
        ConnectionState::Connecting | ConnectionState::Closing => {
            Style::default().fg(Color::Yellow)
        },
        ConnectionState::Opened | ConnectionState::Received => {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        },
        ConnectionState::Closed => Style::default().fg(Color::Red),
        ConnectionState::Failed => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Summary of silently dropped frames, `None` when nothing was dropped.
fn drops_label(drops: DropStats) -> Option<String> {
    if drops.decode_failures == 0 && drops.suppressed_echoes == 0 {
        return None;
    }
    Some(format!(
        "dropped: {} undecodable, {} echoes",
        drops.decode_failures, drops.suppressed_echoes
    ))
}
