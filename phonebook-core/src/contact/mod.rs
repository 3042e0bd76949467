// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! The contact record and its field validation rules.

mod validation;

pub use validation::{
    validate_name, validate_number, ValidationError, MAX_NAME_LENGTH, MAX_NUMBER_DIGITS,
};

use serde::{Deserialize, Serialize};

/// A single phonebook entry.
///
/// The id is assigned once, at creation, from the id service; name and number
/// hold the values the user entered, trimmed but otherwise untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Process-unique identifier, immutable after creation.
    id: String,
    /// Display name, letters and whitespace only.
    name: String,
    /// Phone number as entered.
    number: String,
}

impl Contact {
    /// Creates a contact from an already-generated id and validated values.
    pub fn new(id: String, name: &str, number: &str) -> Self {
        Contact {
            id,
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    /// Returns the contact's unique ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the phone number.
    pub fn number(&self) -> &str {
        &self.number
    }
}
