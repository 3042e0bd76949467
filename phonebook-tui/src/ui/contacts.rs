//! Contacts Screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use phonebook_core::filter_by_name;

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    // Split area for search bar and list
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    // Search bar
    let search_title = if app.contact_search_mode {
        "Search (type to search, Esc to exit)"
    } else {
        "Search (/ to search)"
    };
    let search_style = if app.contact_search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search_text = if app.contact_search_query.is_empty() && !app.contact_search_mode {
        "Press / to search...".to_string()
    } else {
        app.contact_search_query.clone()
    };
    let search_bar = Paragraph::new(search_text)
        .style(search_style)
        .block(Block::default().borders(Borders::ALL).title(search_title));
    f.render_widget(search_bar, chunks[0]);

    // Filter contacts
    let contacts = app.backend.contacts();
    let filtered = filter_by_name(contacts, &app.contact_search_query);

    if filtered.is_empty() {
        let msg = if contacts.is_empty() {
            "No contacts yet. Add one from the entry form!"
        } else {
            "No contacts match your search."
        };
        let empty = Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Contacts"));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(display_idx, contact)| {
            let content = format!("{}  {}", contact.name(), contact.number());
            let style = if display_idx == app.selected_contact {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("Contacts ({} shown)", filtered.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.selected_contact));
    f.render_stateful_widget(list, chunks[1], &mut state);
}
