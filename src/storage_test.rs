use super::*;

#[test]
fn empty_store_loads_nothing() {
    let store = MemoryStore::new();
    assert_eq!(store.load("theme"), Ok(None));
}

#[test]
fn save_then_load() {
    let mut store = MemoryStore::new();
    store.save("theme", "dark").expect("writable store");
    assert_eq!(store.load("theme"), Ok(Some("dark".to_owned())));
    assert_eq!(store.get("theme"), Some("dark"));
}

#[test]
fn save_overwrites() {
    let mut store = MemoryStore::with_entry("theme", "dark");
    store.save("theme", "light").expect("writable store");
    assert_eq!(store.get("theme"), Some("light"));
}

#[test]
fn read_only_store_rejects_writes() {
    let mut store = MemoryStore::read_only();
    let err = store.save("theme", "dark").expect_err("read-only");
    assert!(matches!(err, StorageError::Rejected { op: "save", .. }));
    assert_eq!(store.get("theme"), None);
}

#[test]
fn rejected_error_message_names_key() {
    let err = StorageError::Rejected { op: "save", key: "theme".to_owned(), reason: "quota".to_owned() };
    let msg = err.to_string();
    assert!(msg.contains("\"theme\""));
    assert!(msg.contains("quota"));
}
