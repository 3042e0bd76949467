//! Keyboard Input Handling

use crossterm::event::KeyCode;

use crate::app::{App, FormFocus, InputMode, Screen};

/// Action to take after handling input.
pub enum Action {
    Continue,
    Quit,
}

/// Handle a key press.
pub fn handle_key(app: &mut App, key: KeyCode) -> Action {
    // The duplicate notice is modal: it swallows every key until dismissed.
    if app.notice.is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return Action::Continue;
    }

    match app.screen {
        Screen::AddContact => handle_form_keys(app, key),
        Screen::Contacts => handle_contacts_keys(app, key),
        Screen::Help => handle_help_keys(app, key),
    }
}

fn handle_form_keys(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter => match app.focus {
            // Enter moves on from the name field and confirms from the
            // number field or the add button.
            FormFocus::Name => app.focus_next(),
            FormFocus::Number | FormFocus::Submit => app.submit_form(),
        },
        KeyCode::Esc => {
            if app.input_mode == InputMode::Editing {
                // Drop out of the inputs to the button row.
                app.focus_submit();
            } else {
                return Action::Quit;
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = app.focus.field() {
                app.backend.form.pop(field);
            }
        }
        KeyCode::Char(c) => {
            if app.input_mode == InputMode::Editing {
                if let Some(field) = app.focus.field() {
                    app.backend.form.push(field, c);
                }
            } else {
                match c {
                    'q' => return Action::Quit,
                    'c' => app.goto(Screen::Contacts),
                    '?' => app.goto(Screen::Help),
                    _ => {}
                }
            }
        }
        _ => {}
    }

    Action::Continue
}

fn handle_contacts_keys(app: &mut App, key: KeyCode) -> Action {
    // Handle search mode
    if app.contact_search_mode {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                app.contact_search_mode = false;
            }
            KeyCode::Backspace => {
                app.contact_search_query.pop();
                app.selected_contact = 0;
            }
            KeyCode::Char(c) => {
                app.contact_search_query.push(c);
                app.selected_contact = 0;
            }
            _ => {}
        }
        return Action::Continue;
    }

    // Normal navigation mode
    match key {
        KeyCode::Char('/') => {
            app.contact_search_mode = true;
            app.contact_search_query.clear();
            app.selected_contact = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let shown = app.filtered_contact_count();
            if app.selected_contact < shown.saturating_sub(1) {
                app.selected_contact += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.selected_contact > 0 {
                app.selected_contact -= 1;
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => app.remove_selected_contact(),
        KeyCode::Char('a') | KeyCode::Esc => app.go_back(),
        KeyCode::Char('?') => app.goto(Screen::Help),
        KeyCode::Char('q') => return Action::Quit,
        _ => {}
    }

    Action::Continue
}

fn handle_help_keys(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => {
            app.go_back();
        }
        _ => {}
    }

    Action::Continue
}
