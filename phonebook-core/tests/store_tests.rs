//! Tests for the in-memory contact store and the list filter

use phonebook_core::{filter_by_name, Contact, ContactStore, MemoryStore};

fn contact(id: &str, name: &str) -> Contact {
    Contact::new(id.to_string(), name, "123-4567")
}

// === Append & Order ===

#[test]
fn test_append_preserves_insertion_order() {
    let mut store = MemoryStore::new();
    store.append(contact("1", "Ann"));
    store.append(contact("2", "Ben"));
    store.append(contact("3", "Cleo"));

    let names: Vec<&str> = store.contacts().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Ann", "Ben", "Cleo"]);
}

#[test]
fn test_new_store_is_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

// === Remove ===

#[test]
fn test_remove_present_id() {
    let mut store = MemoryStore::new();
    store.append(contact("1", "Ann"));
    store.append(contact("2", "Ben"));

    assert!(store.remove("1"));
    assert_eq!(store.len(), 1);
    assert_eq!(store.contacts()[0].name(), "Ben");
}

#[test]
fn test_remove_absent_id_is_a_noop() {
    let mut store = MemoryStore::new();
    store.append(contact("1", "Ann"));

    assert!(!store.remove("nope"));
    assert_eq!(store.len(), 1);
}

// === Filter ===

#[test]
fn test_empty_query_returns_everything() {
    let contacts = vec![contact("1", "Ann"), contact("2", "Ben")];
    assert_eq!(filter_by_name(&contacts, "").len(), 2);
}

#[test]
fn test_filter_is_case_insensitive() {
    let contacts = vec![
        contact("1", "Ann"),
        contact("2", "Annabel"),
        contact("3", "Ben"),
    ];

    let hits = filter_by_name(&contacts, "ANN");
    let names: Vec<&str> = hits.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Ann", "Annabel"]);
}

#[test]
fn test_filter_matches_substrings() {
    let contacts = vec![contact("1", "Mary Ann"), contact("2", "Ben")];
    assert_eq!(filter_by_name(&contacts, "ann").len(), 1);
}

#[test]
fn test_filter_with_no_match_is_empty() {
    let contacts = vec![contact("1", "Ann")];
    assert!(filter_by_name(&contacts, "zzz").is_empty());
}
