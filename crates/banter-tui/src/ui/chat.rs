//! Chat area
//!
//! Displays the message history, pinned to the latest message. Own messages
//! sit on the right, everyone else's on the left.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::App;

const BORDER_SIZE: u16 = 2;

/// Render the chat area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Messages ");

    let messages = &app.snapshot().messages;
    let items: Vec<ListItem> = if messages.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No messages yet",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        messages
            .iter()
            .map(|message| {
                let own = app.is_own(message);
                let sender_style = if own {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                };

                let line = Line::from(vec![
                    Span::styled(format!("<{}>", message.sender_id), sender_style),
                    Span::raw(" "),
                    Span::raw(message.text.clone()),
                ]);
                let line = if own { line.alignment(Alignment::Right) } else { line };

                ListItem::new(line)
            })
            .collect()
    };

    // Keep the latest message visible.
    let visible_height = usize::from(area.height.saturating_sub(BORDER_SIZE));
    let skip = items.len().saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().skip(skip).collect();

    let list = List::new(visible_items).block(block);

    frame.render_widget(list, area);
}
