use crate::credential::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore, STORAGE_FILE_NAME,
};

use common::RedactedToken;

use tempfile::TempDir;

#[test]
fn given_empty_memory_store_when_queried_then_unauthenticated() {
    let store = MemoryCredentialStore::new();

    assert!(store.get().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn given_memory_store_when_token_set_twice_then_latest_wins() {
    // GIVEN
    let store = MemoryCredentialStore::new();

    // WHEN
    store.set(RedactedToken::new("first"));
    store.set(RedactedToken::new("second"));

    // THEN
    assert_eq!(store.get().unwrap().expose(), "second");
    assert!(store.is_authenticated());
}

/// **BUG THIS CATCHES**: Would catch a clear that panics or errors when
/// nothing is stored (logout after a 401 already cleared the token).
#[test]
fn given_memory_store_when_cleared_twice_then_second_clear_is_noop() {
    let store = MemoryCredentialStore::with_token("abc");

    store.clear();
    store.clear();

    assert!(store.get().is_none());
}

#[test]
fn given_empty_token_when_stored_then_not_authenticated() {
    let store = MemoryCredentialStore::with_token("");

    assert!(!store.is_authenticated());
}

/// **VALUE**: Verifies the credential survives a restart.
///
/// **WHY THIS MATTERS**: Users expect to stay logged in across launches until
/// logout or a 401.
#[test]
fn given_file_store_when_token_set_then_reopened_store_sees_it() {
    // GIVEN: A store in a fresh directory
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::open(dir.path()).unwrap();
    assert!(store.get().is_none());

    // WHEN: Setting a token and reopening
    store.set(RedactedToken::new("persisted-token"));
    let reopened = FileCredentialStore::open(dir.path()).unwrap();

    // THEN
    assert_eq!(reopened.get().unwrap().expose(), "persisted-token");
    assert!(dir.path().join(STORAGE_FILE_NAME).exists());
}

#[test]
fn given_file_store_when_cleared_then_reopened_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::open(dir.path()).unwrap();
    store.set(RedactedToken::new("t"));

    store.clear();
    let reopened = FileCredentialStore::open(dir.path()).unwrap();

    assert!(reopened.get().is_none());
}

#[test]
fn given_file_store_without_token_when_cleared_then_no_file_written() {
    let dir = TempDir::new().unwrap();
    let store = FileCredentialStore::open(dir.path()).unwrap();

    store.try_clear().unwrap();

    assert!(!store.path().exists());
}

#[test]
fn given_storage_with_other_keys_when_token_cleared_then_other_keys_survive() {
    // GIVEN: A storage file holding an unrelated setting
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(STORAGE_FILE_NAME),
        r#"{"theme":"dark","token":"abc"}"#,
    )
    .unwrap();
    let store = FileCredentialStore::open(dir.path()).unwrap();

    // WHEN
    store.try_clear().unwrap();

    // THEN
    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert!(contents.contains("theme"));
    assert!(!contents.contains("token"));
}

#[test]
fn given_corrupt_storage_file_when_opened_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(STORAGE_FILE_NAME), "not json").unwrap();

    let result = FileCredentialStore::open(dir.path());

    assert!(result.is_err());
}

#[test]
fn given_missing_directory_when_token_set_then_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FileCredentialStore::open(&nested).unwrap();

    store.try_set(RedactedToken::new("t")).unwrap();

    assert!(nested.join(STORAGE_FILE_NAME).exists());
}
