//! UI Rendering

mod contacts;
mod form;
mod help;
mod notice;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Screen};

/// Draw the application.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer/status
        ])
        .split(f.area());

    // Header
    draw_header(f, chunks[0], app);

    // Content
    match app.screen {
        Screen::AddContact => form::draw(f, chunks[1], app),
        Screen::Contacts => contacts::draw(f, chunks[1], app),
        Screen::Help => help::draw(f, chunks[1], app),
    }

    // Footer
    draw_footer(f, chunks[2], app);

    // The duplicate notice overlays everything until dismissed.
    if app.notice.is_some() {
        notice::draw(f, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.screen {
        Screen::AddContact => "Phonebook - Add Contact",
        Screen::Contacts => "Contacts",
        Screen::Help => "Help",
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status {
        Some(message) => message.clone(),
        None => match app.screen {
            Screen::AddContact => {
                "Tab=next field  Enter=add  Esc=buttons  (c=contacts ?=help q=quit)".to_string()
            }
            Screen::Contacts => {
                "/=search  j/k=move  x=delete  a/Esc=back to form  q=quit".to_string()
            }
            Screen::Help => "Esc=back".to_string(),
        },
    };

    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
