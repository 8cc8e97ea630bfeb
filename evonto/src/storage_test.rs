use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_overwrites() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "old").unwrap();
    storage.set(TOKEN_KEY, "new").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("new"));
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("nothing-here");
    assert!(storage.is_empty());
}

#[test]
fn legacy_keys_do_not_overlap_session_keys() {
    assert!(!LEGACY_KEYS.contains(&TOKEN_KEY));
    assert!(!LEGACY_KEYS.contains(&USER_INFO_KEY));
}
