//! Contact Entry Form Screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use phonebook_core::Field;

use crate::app::{App, FormFocus, InputMode};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name input
            Constraint::Length(1), // Name error or hint
            Constraint::Length(3), // Number input
            Constraint::Length(1), // Number error or hint
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Add button
            Constraint::Min(0),    // Spacer
        ])
        .margin(1)
        .split(area);

    draw_input(f, chunks[0], app, Field::Name, FormFocus::Name, "Name");
    draw_field_note(
        f,
        chunks[1],
        app,
        Field::Name,
        "Letters and spaces, at most 30 characters",
    );
    draw_input(f, chunks[2], app, Field::Number, FormFocus::Number, "Number");
    draw_field_note(
        f,
        chunks[3],
        app,
        Field::Number,
        "Digits with spaces, dashes, dots, or parentheses; may start with +",
    );
    draw_submit(f, chunks[5], app);
}

fn draw_input(f: &mut Frame, area: Rect, app: &App, field: Field, focus: FormFocus, title: &str) {
    let focused = app.focus == focus;
    let value = app.backend.form.value(field);
    let text = if focused && app.input_mode == InputMode::Editing {
        format!("{}|", value)
    } else {
        value.to_string()
    };

    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(input, area);
}

/// The line under an input: the field's error once it has been visited,
/// otherwise a format hint.
fn draw_field_note(f: &mut Frame, area: Rect, app: &App, field: Field, hint: &str) {
    let note = match app.backend.form.visible_error(field) {
        Some(error) => Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(note, area);
}

fn draw_submit(f: &mut Frame, area: Rect, app: &App) {
    let style = if app.focus == FormFocus::Submit {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new("[ Add contact ]").style(style);
    f.render_widget(button, area);
}
