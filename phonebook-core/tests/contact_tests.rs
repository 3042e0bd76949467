//! Tests for the contact record and the id sources

use phonebook_core::{Contact, IdSource, SequentialSource, UuidSource};

// === Contact ===

#[test]
fn test_contact_accessors() {
    let contact = Contact::new("abc".into(), "John Doe", "+1 (555) 123-4567");

    assert_eq!(contact.id(), "abc");
    assert_eq!(contact.name(), "John Doe");
    assert_eq!(contact.number(), "+1 (555) 123-4567");
}

#[test]
fn test_contact_serializes_to_flat_record() {
    let contact = Contact::new("abc".into(), "John Doe", "123-4567");
    let json = serde_json::to_value(&contact).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert_eq!(object["id"], "abc");
    assert_eq!(object["name"], "John Doe");
    assert_eq!(object["number"], "123-4567");
}

#[test]
fn test_contact_roundtrips_through_json() {
    let contact = Contact::new("abc".into(), "John Doe", "123-4567");
    let json = serde_json::to_string(&contact).unwrap();
    let back: Contact = serde_json::from_str(&json).unwrap();

    assert_eq!(back, contact);
}

// === Id Sources ===

#[test]
fn test_sequential_source_is_deterministic() {
    let mut ids = SequentialSource::new();
    assert_eq!(ids.next_id(), "contact-1");
    assert_eq!(ids.next_id(), "contact-2");
    assert_eq!(ids.next_id(), "contact-3");
}

#[test]
fn test_uuid_source_draws_differ() {
    let mut ids = UuidSource::new();
    let first = ids.next_id();
    let second = ids.next_id();

    assert!(!first.is_empty());
    assert_ne!(first, second);
}
