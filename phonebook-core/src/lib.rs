//! Phonebook Core Library
//!
//! Contact book primitives: the contact record, declarative field validation,
//! the contact store abstraction, and the entry form controller that feeds it.

pub mod contact;
pub mod form;
pub mod id;
pub mod store;

pub use contact::{
    validate_name, validate_number, Contact, ValidationError, MAX_NAME_LENGTH, MAX_NUMBER_DIGITS,
};
pub use form::{ContactForm, Field, FormStatus, SubmitError};
pub use id::{IdSource, SequentialSource, UuidSource};
pub use store::{filter_by_name, ContactStore, MemoryStore};
