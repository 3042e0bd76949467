//! Application State

use phonebook_core::{filter_by_name, Field, SubmitError};

use crate::backend::Backend;

/// Active screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    AddContact,
    Contacts,
    Help,
}

/// Input mode: `Normal` routes keys to navigation, `Editing` to the focused
/// input field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Focus order on the entry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Number,
    Submit,
}

impl FormFocus {
    /// Tab order: name, number, the add button, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Number,
            FormFocus::Number => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Submit,
            FormFocus::Number => FormFocus::Name,
            FormFocus::Submit => FormFocus::Number,
        }
    }

    /// The core field under this focus, if it is an input.
    pub fn field(self) -> Option<Field> {
        match self {
            FormFocus::Name => Some(Field::Name),
            FormFocus::Number => Some(Field::Number),
            FormFocus::Submit => None,
        }
    }
}

/// Application state.
pub struct App {
    pub backend: Backend,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub focus: FormFocus,
    /// Blocking duplicate notice text, while one is shown.
    pub notice: Option<String>,
    /// Transient status line message.
    pub status: Option<String>,
    pub contact_search_mode: bool,
    pub contact_search_query: String,
    pub selected_contact: usize,
    prev_screen: Option<Screen>,
}

impl App {
    pub fn new(backend: Backend) -> Self {
        App {
            backend,
            screen: Screen::AddContact,
            // Focus starts on the name input.
            input_mode: InputMode::Editing,
            focus: FormFocus::default(),
            notice: None,
            status: None,
            contact_search_mode: false,
            contact_search_query: String::new(),
            selected_contact: 0,
            prev_screen: None,
        }
    }

    pub fn goto(&mut self, screen: Screen) {
        self.prev_screen = Some(self.screen);
        self.screen = screen;
    }

    pub fn go_back(&mut self) {
        self.screen = self.prev_screen.take().unwrap_or(Screen::AddContact);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Moves form focus forward, blurring the input being left.
    pub fn focus_next(&mut self) {
        self.blur_current();
        self.focus = self.focus.next();
        self.sync_input_mode();
    }

    /// Moves form focus backward, blurring the input being left.
    pub fn focus_prev(&mut self) {
        self.blur_current();
        self.focus = self.focus.prev();
        self.sync_input_mode();
    }

    /// Jumps focus to the add button (Esc from an input).
    pub fn focus_submit(&mut self) {
        self.blur_current();
        self.focus = FormFocus::Submit;
        self.sync_input_mode();
    }

    /// Runs the submission and routes the outcome to the right surface:
    /// status line on success or invalid fields, blocking notice on a
    /// duplicate name.
    pub fn submit_form(&mut self) {
        match self.backend.submit() {
            Ok(contact) => {
                self.set_status(format!("Added {}", contact.name()));
                self.focus = FormFocus::default();
                self.sync_input_mode();
            }
            Err(err @ SubmitError::Duplicate { .. }) => {
                self.notice = Some(err.to_string());
            }
            Err(err) => {
                self.set_status(err.to_string());
            }
        }
    }

    /// Dismisses the duplicate notice, keeping the draft for correction.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.backend.form.dismiss_notice();
    }

    /// Number of contacts the current search shows.
    pub fn filtered_contact_count(&self) -> usize {
        filter_by_name(self.backend.contacts(), &self.contact_search_query).len()
    }

    /// Removes the contact currently selected in the filtered list.
    pub fn remove_selected_contact(&mut self) {
        let id = filter_by_name(self.backend.contacts(), &self.contact_search_query)
            .get(self.selected_contact)
            .map(|c| c.id().to_string());

        if let Some(id) = id {
            if self.backend.remove_contact(&id) {
                self.set_status("Contact removed");
                if self.selected_contact > 0 {
                    self.selected_contact -= 1;
                }
            }
        }
    }

    fn blur_current(&mut self) {
        if let Some(field) = self.focus.field() {
            self.backend.form.blur(field);
        }
    }

    fn sync_input_mode(&mut self) {
        self.input_mode = if self.focus.field().is_some() {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
    }
}
