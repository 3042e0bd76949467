// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Validation
//!
//! Each entry field has an ordered list of checks; validation trims the raw
//! value and reports the first failing check. Both fields are always checked
//! independently, and the checks never consult the contact store.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Maximum name length in characters, after trimming.
pub const MAX_NAME_LENGTH: usize = 30;

/// Maximum number of digits in a phone number (E.164 budget).
pub const MAX_NUMBER_DIGITS: usize = 15;

/// Loose international phone shape: optional `+`, digit groups separated by
/// a dash, dot, or space, one group optionally parenthesized, non-letter
/// padding allowed at either end.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^a-zA-Z]*\+?\d{1,4}?[-.\s]?\(?\d{1,3}?\)?[-.\s]?\d{1,4}[-.\s]?\d{1,4}[-.\s]?\d{1,9}[^a-zA-Z]*$",
    )
    .expect("phone pattern is valid")
});

/// Validation error types. The messages are the user-facing strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Name may contain only letters and spaces")]
    InvalidName,
    #[error("Name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("Phone number must be digits and can contain spaces, dashes, parentheses, and can start with +")]
    InvalidNumber,
    #[error("Phone number must be at most {max} digits")]
    NumberTooLong { max: usize },
}

/// A single check against the trimmed field value.
type Check = fn(&str) -> Option<ValidationError>;

/// Name rules, in evaluation order.
const NAME_CHECKS: &[Check] = &[required, name_charset, name_length];

/// Number rules, in evaluation order.
const NUMBER_CHECKS: &[Check] = &[required, number_shape, number_length];

/// Validates a name against the name rule list.
pub fn validate_name(raw: &str) -> Result<(), ValidationError> {
    run_checks(NAME_CHECKS, raw)
}

/// Validates a phone number against the number rule list.
pub fn validate_number(raw: &str) -> Result<(), ValidationError> {
    run_checks(NUMBER_CHECKS, raw)
}

fn run_checks(checks: &[Check], raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    for check in checks {
        if let Some(error) = check(value) {
            return Err(error);
        }
    }
    Ok(())
}

fn required(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        Some(ValidationError::Required)
    } else {
        None
    }
}

fn name_charset(value: &str) -> Option<ValidationError> {
    let valid = value.chars().all(|c| c.is_alphabetic() || c.is_whitespace());
    if valid {
        None
    } else {
        Some(ValidationError::InvalidName)
    }
}

fn name_length(value: &str) -> Option<ValidationError> {
    if value.chars().count() > MAX_NAME_LENGTH {
        Some(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        })
    } else {
        None
    }
}

fn number_shape(value: &str) -> Option<ValidationError> {
    if NUMBER_PATTERN.is_match(value) {
        None
    } else {
        Some(ValidationError::InvalidNumber)
    }
}

fn number_length(value: &str) -> Option<ValidationError> {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits > MAX_NUMBER_DIGITS {
        Some(ValidationError::NumberTooLong {
            max: MAX_NUMBER_DIGITS,
        })
    } else {
        None
    }
}
