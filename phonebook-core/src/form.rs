// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry Form Controller
//!
//! Holds the two-field draft, re-validates on every change and blur, and
//! performs the duplicate-checked submission into the contact store.

use thiserror::Error;

use crate::contact::{validate_name, validate_number, Contact, ValidationError};
use crate::id::IdSource;
use crate::store::ContactStore;

/// The two entry fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Number,
}

/// Where the form is in its submission cycle.
///
/// `Blocked` keeps the draft for correction; `Submitted` has already cleared
/// it. Any edit returns the form to `Editing`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Blocked { existing: String },
    Submitted,
}

/// Why a submission was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Fix the highlighted fields first")]
    Invalid,
    #[error("{name} is already in contacts.")]
    Duplicate { name: String },
}

/// Per-field draft state.
#[derive(Clone, Debug, Default)]
struct FieldState {
    value: String,
    touched: bool,
    error: Option<ValidationError>,
}

/// The contact entry form.
#[derive(Clone, Debug)]
pub struct ContactForm {
    name: FieldState,
    number: FieldState,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm::new()
    }
}

impl ContactForm {
    /// An empty form: both fields blank, untouched, in `Editing`.
    pub fn new() -> Self {
        let mut form = ContactForm {
            name: FieldState::default(),
            number: FieldState::default(),
            status: FormStatus::Editing,
        };
        form.revalidate(Field::Name);
        form.revalidate(Field::Number);
        form
    }

    /// Current draft value for a field.
    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    /// Current validation result for a field, touched or not.
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.field(field).error.as_ref()
    }

    /// The error to display. Only fields the user has visited show errors.
    pub fn visible_error(&self, field: Field) -> Option<&ValidationError> {
        let state = self.field(field);
        if state.touched {
            state.error.as_ref()
        } else {
            None
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// True when every field passes its rules.
    pub fn is_valid(&self) -> bool {
        self.name.error.is_none() && self.number.error.is_none()
    }

    /// Replaces a field's draft value and re-validates it.
    pub fn set_value(&mut self, field: Field, value: &str) {
        self.status = FormStatus::Editing;
        self.field_mut(field).value = value.to_string();
        self.revalidate(field);
    }

    /// Appends a character to a field's draft (terminal input path).
    pub fn push(&mut self, field: Field, ch: char) {
        self.status = FormStatus::Editing;
        self.field_mut(field).value.push(ch);
        self.revalidate(field);
    }

    /// Deletes the last character of a field's draft.
    pub fn pop(&mut self, field: Field) {
        self.status = FormStatus::Editing;
        self.field_mut(field).value.pop();
        self.revalidate(field);
    }

    /// Marks a field as visited and re-validates it.
    pub fn blur(&mut self, field: Field) {
        self.field_mut(field).touched = true;
        self.revalidate(field);
    }

    /// Validated submission into the store.
    ///
    /// Re-checks both fields, scans the collection for a case-insensitive
    /// name match, and only then appends a freshly-identified contact. On
    /// success the draft is cleared; on a duplicate it is kept so the user
    /// can correct it.
    pub fn submit(
        &mut self,
        store: &mut dyn ContactStore,
        ids: &mut dyn IdSource,
    ) -> Result<Contact, SubmitError> {
        self.blur(Field::Name);
        self.blur(Field::Number);
        if !self.is_valid() {
            self.status = FormStatus::Editing;
            return Err(SubmitError::Invalid);
        }

        let name = self.name.value.trim().to_string();
        let number = self.number.value.trim().to_string();

        // Case folding is for comparison only; the stored name keeps the
        // user's casing.
        let folded = name.to_lowercase();
        if let Some(existing) = store
            .contacts()
            .iter()
            .find(|c| c.name().to_lowercase() == folded)
        {
            let existing = existing.name().to_string();
            self.status = FormStatus::Blocked {
                existing: existing.clone(),
            };
            return Err(SubmitError::Duplicate { name: existing });
        }

        let contact = Contact::new(ids.next_id(), &name, &number);
        store.append(contact.clone());
        self.reset();
        self.status = FormStatus::Submitted;
        Ok(contact)
    }

    /// Returns a blocked form to editing, keeping the draft.
    pub fn dismiss_notice(&mut self) {
        if matches!(self.status, FormStatus::Blocked { .. }) {
            self.status = FormStatus::Editing;
        }
    }

    /// Clears values, touched flags, and errors back to the initial state.
    pub fn reset(&mut self) {
        *self = ContactForm::new();
    }

    fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Number => &self.number,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Number => &mut self.number,
        }
    }

    fn revalidate(&mut self, field: Field) {
        let result = match field {
            Field::Name => validate_name(&self.name.value),
            Field::Number => validate_number(&self.number.value),
        };
        self.field_mut(field).error = result.err();
    }
}
