//! User-id prompt
//!
//! Centered overlay asking for a display name before the chat is usable.
//! There is no validation and no uniqueness: whatever the user types becomes
//! their sender id.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

const PROMPT_WIDTH: u16 = 40;
const PROMPT_HEIGHT: u16 = 4;

/// Render the user-id prompt overlay.
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered(frame.area(), PROMPT_WIDTH, PROMPT_HEIGHT);

    let block = Block::default().borders(Borders::ALL).title(" User Id ");
    let lines = vec![
        Line::from(format!("> {}", app.input().buffer())),
        Line::from("Enter to start, Esc to quit").style(Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Center a `width` x `height` rect inside `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered;

    #[test]
    fn centered_rect_sits_inside_the_area() {
        let area = Rect { x: 0, y: 0, width: 80, height: 24 };
        let rect = centered(area, 40, 4);
        assert_eq!(rect, Rect { x: 20, y: 10, width: 40, height: 4 });
    }

    #[test]
    fn centered_rect_clamps_to_small_areas() {
        let area = Rect { x: 0, y: 0, width: 10, height: 2 };
        let rect = centered(area, 40, 4);
        assert_eq!(rect, Rect { x: 0, y: 0, width: 10, height: 2 });
    }
}
