//! Duplicate Contact Notice
//!
//! Blocking modal shown when a submission collides with an existing name.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let Some(message) = app.notice.as_deref() else {
        return;
    };

    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let text = format!("{}\n\nPress Enter to dismiss.", message);
    let notice = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title("Cannot add contact")
                .borders(Borders::ALL),
        );
    f.render_widget(notice, area);
}

/// Centers a `percent_x` x `percent_y` rectangle inside `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
