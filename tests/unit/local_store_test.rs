//! Unit tests for the local key/value store: whole-blob round trips,
//! absent keys, removal, and corrupt-value recovery.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use skillswap::database::connection::Database;
use skillswap::services::local_store::{keys, LocalStore};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct Blob {
    name: String,
    count: u32,
}

fn setup() -> LocalStore {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    LocalStore::new(Arc::new(db))
}

#[test]
fn test_set_get_roundtrip() {
    let store = setup();
    let blob = Blob {
        name: "hello".to_string(),
        count: 3,
    };

    store.set("test_key", &blob).unwrap();
    let loaded: Option<Blob> = store.get("test_key").unwrap();
    assert_eq!(loaded, Some(blob));
}

#[test]
fn test_get_missing_key_returns_none() {
    let store = setup();
    let loaded: Option<Blob> = store.get("absent").unwrap();
    assert_eq!(loaded, None);
}

#[test]
fn test_set_replaces_whole_value() {
    let store = setup();
    store.set("k", &Blob { name: "a".to_string(), count: 1 }).unwrap();
    store.set("k", &Blob { name: "b".to_string(), count: 2 }).unwrap();

    let loaded: Blob = store.get("k").unwrap().unwrap();
    assert_eq!(loaded.name, "b");
    assert_eq!(loaded.count, 2);
}

#[test]
fn test_remove_and_contains() {
    let store = setup();
    store.set("k", &Blob::default()).unwrap();
    assert!(store.contains("k"));

    store.remove("k").unwrap();
    assert!(!store.contains("k"));

    // Removing an absent key is not an error
    store.remove("k").unwrap();
}

/// A value that no longer parses resets its key and reads as absent, so
/// the owning feature falls back to its default state.
#[test]
fn test_corrupt_value_resets_key() {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    let store = LocalStore::new(db.clone());

    db.connection()
        .execute(
            "INSERT INTO local_store (key, value, updated_at) VALUES (?1, 'not json{{', 0)",
            rusqlite::params![keys::PORTFOLIO],
        )
        .unwrap();

    let loaded: Option<Blob> = store.get(keys::PORTFOLIO).unwrap();
    assert_eq!(loaded, None);
    // The corrupt row is gone
    assert!(!store.contains(keys::PORTFOLIO));
}

#[test]
fn test_get_or_default_on_missing_and_corrupt() {
    let store = setup();
    let blob: Blob = store.get_or_default("absent").unwrap();
    assert_eq!(blob, Blob::default());
}
