//! Tests for entry field validation
//!
//! Covers the ordered rule lists for both fields: required, format, and
//! length checks, plus message/rule consistency.

use phonebook_core::{
    validate_name, validate_number, ValidationError, MAX_NAME_LENGTH, MAX_NUMBER_DIGITS,
};

// === Name Rules ===

#[test]
fn test_name_accepts_letters_and_spaces() {
    assert_eq!(validate_name("John Doe"), Ok(()));
    assert_eq!(validate_name("Ann"), Ok(()));
}

#[test]
fn test_name_accepts_non_ascii_letters() {
    assert_eq!(validate_name("Zoë"), Ok(()));
    assert_eq!(validate_name("Łukasz"), Ok(()));
}

#[test]
fn test_name_trims_before_checking() {
    assert_eq!(validate_name("  John Doe  "), Ok(()));
}

#[test]
fn test_empty_name_is_required() {
    assert_eq!(validate_name(""), Err(ValidationError::Required));
    assert_eq!(validate_name("   "), Err(ValidationError::Required));
}

#[test]
fn test_name_rejects_digits() {
    assert_eq!(validate_name("John3"), Err(ValidationError::InvalidName));
}

#[test]
fn test_name_rejects_symbols() {
    assert_eq!(validate_name("John!"), Err(ValidationError::InvalidName));
    // The matching rule admits only letters and whitespace, so the
    // apostrophe and dash are out too.
    assert_eq!(validate_name("O'Brien"), Err(ValidationError::InvalidName));
    assert_eq!(validate_name("Jean-Luc"), Err(ValidationError::InvalidName));
}

#[test]
fn test_name_at_limit_passes() {
    let name = "a".repeat(MAX_NAME_LENGTH);
    assert_eq!(validate_name(&name), Ok(()));
}

#[test]
fn test_name_over_limit_fails() {
    let name = "a".repeat(MAX_NAME_LENGTH + 1);
    assert_eq!(
        validate_name(&name),
        Err(ValidationError::NameTooLong {
            max: MAX_NAME_LENGTH
        })
    );
}

#[test]
fn test_name_length_counts_characters_not_bytes() {
    // 30 two-byte characters are still 30 characters.
    let name = "é".repeat(MAX_NAME_LENGTH);
    assert_eq!(validate_name(&name), Ok(()));
}

// === Number Rules ===

#[test]
fn test_number_accepts_grouped_formats() {
    assert_eq!(validate_number("123-4567"), Ok(()));
    assert_eq!(validate_number("555 123 4567"), Ok(()));
    assert_eq!(validate_number("5551234567"), Ok(()));
    assert_eq!(validate_number("+1 (555) 123-4567"), Ok(()));
}

#[test]
fn test_number_trims_before_checking() {
    assert_eq!(validate_number("  123-4567  "), Ok(()));
}

#[test]
fn test_empty_number_is_required() {
    assert_eq!(validate_number(""), Err(ValidationError::Required));
    assert_eq!(validate_number("   "), Err(ValidationError::Required));
}

#[test]
fn test_number_rejects_letters() {
    assert_eq!(
        validate_number("phone123"),
        Err(ValidationError::InvalidNumber)
    );
    assert_eq!(
        validate_number("555-CALL-NOW"),
        Err(ValidationError::InvalidNumber)
    );
}

#[test]
fn test_number_rejects_too_few_digits() {
    // The grouped pattern needs more digits than this to fill its groups.
    assert_eq!(validate_number("12"), Err(ValidationError::InvalidNumber));
    assert_eq!(validate_number("+"), Err(ValidationError::InvalidNumber));
}

#[test]
fn test_number_at_digit_limit_passes() {
    let number = "1".repeat(MAX_NUMBER_DIGITS);
    assert_eq!(validate_number(&number), Ok(()));
}

#[test]
fn test_number_over_digit_limit_fails() {
    let number = "1".repeat(MAX_NUMBER_DIGITS + 1);
    assert_eq!(
        validate_number(&number),
        Err(ValidationError::NumberTooLong {
            max: MAX_NUMBER_DIGITS
        })
    );
}

#[test]
fn test_number_limit_counts_digits_not_separators() {
    // 11 digits spread over 17 characters is fine.
    assert_eq!(validate_number("+1 (555) 123-4567"), Ok(()));
}

// === Idempotence ===

#[test]
fn test_validation_is_idempotent() {
    for value in ["", "John Doe", "John3", "123-4567", "not a number"] {
        assert_eq!(validate_name(value), validate_name(value));
        assert_eq!(validate_number(value), validate_number(value));
    }
}

// === Messages ===

#[test]
fn test_messages_are_user_facing() {
    assert_eq!(
        ValidationError::Required.to_string(),
        "This field is required"
    );
    assert_eq!(
        ValidationError::InvalidName.to_string(),
        "Name may contain only letters and spaces"
    );
    assert_eq!(
        ValidationError::InvalidNumber.to_string(),
        "Phone number must be digits and can contain spaces, dashes, parentheses, and can start with +"
    );
}
