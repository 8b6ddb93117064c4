use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get(AUTH_TOKEN_KEY), None);

    store.set(AUTH_TOKEN_KEY, "T1").unwrap();
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("T1"));

    store.set(AUTH_TOKEN_KEY, "T2").unwrap();
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("T2"));

    store.remove(AUTH_TOKEN_KEY).unwrap();
    assert_eq!(store.get(AUTH_TOKEN_KEY), None);
}

#[test]
fn memory_store_remove_missing_key_is_ok() {
    let store = MemoryStore::new();
    assert!(store.remove("nope").is_ok());
}

#[test]
fn memory_store_with_entries_prepopulates() {
    let store = MemoryStore::with_entries([(USER_EMAIL_KEY, "a@b.com")]);
    assert_eq!(store.get(USER_EMAIL_KEY).as_deref(), Some("a@b.com"));
}

// =============================================================
// FileStore
// =============================================================

#[test]
fn file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("storage.json")).unwrap();
    assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    assert!(!store.path().exists());
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("storage.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.set(AUTH_TOKEN_KEY, "T1").unwrap();
        store.set(USER_EMAIL_KEY, "a@b.com").unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(AUTH_TOKEN_KEY).as_deref(), Some("T1"));
    assert_eq!(reopened.get(USER_EMAIL_KEY).as_deref(), Some("a@b.com"));
}

#[test]
fn file_store_remove_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let store = FileStore::open(&path).unwrap();
    store.set(AUTH_TOKEN_KEY, "T1").unwrap();
    store.set(USER_EMAIL_KEY, "a@b.com").unwrap();
    store.remove(AUTH_TOKEN_KEY).unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(AUTH_TOKEN_KEY), None);
    assert_eq!(reopened.get(USER_EMAIL_KEY).as_deref(), Some("a@b.com"));
}

#[test]
fn file_store_failed_set_leaves_memory_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let store = FileStore::open(blocker.join("storage.json")).unwrap();
    assert!(store.set(AUTH_TOKEN_KEY, "T1").is_err());
    assert_eq!(store.get(AUTH_TOKEN_KEY), None);
}

#[test]
fn file_store_failed_remove_keeps_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let store = FileStore::open(&path).unwrap();
    store.set(AUTH_TOKEN_KEY, "T1").unwrap();

    // A non-empty directory in place of the file makes the rename fail.
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("occupied"), "").unwrap();

    assert!(store.remove(AUTH_TOKEN_KEY).is_err());
    assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("T1"));
}

#[test]
fn file_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StorageError::Json(_)));
}

#[test]
fn file_store_blank_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "  \n").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(USER_EMAIL_KEY), None);
}
