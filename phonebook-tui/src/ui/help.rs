//! Help Screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, _app: &App) {
    let help_text = r#"
Phonebook TUI Help
==================

Entry Form
----------
  Tab/↓   Next field
  S-Tab/↑ Previous field
  Enter   Confirm field / add contact
  Esc     Leave the inputs (then q quits)

  From the button row:
  c       View contacts
  ?       Show this help
  q       Quit

Contacts Screen
---------------
  /       Search by name
  j/↓     Move down
  k/↑     Move up
  x/Del   Delete selected contact
  a/Esc   Back to the entry form

A new contact is rejected when its name is
already in the phonebook, ignoring case.

Press Esc or q to close this help screen.
"#;

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Help").borders(Borders::ALL));

    f.render_widget(help, area);
}
