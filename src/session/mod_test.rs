use std::sync::Arc;

use super::*;

fn memory_store() -> SessionStore {
    SessionStore::with_backend(Arc::new(MemoryStorage::default()))
}

fn sample_user() -> User {
    User {
        id: 1,
        nombre: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        roles: vec!["Administrador".to_owned()],
        permissions: vec!["admin.sidebar.roles.y.permisos".to_owned()],
    }
}

// =============================================================
// Read paths never fail
// =============================================================

#[test]
fn read_returns_none_when_absent() {
    assert_eq!(memory_store().read(), None);
}

#[test]
fn read_returns_none_for_malformed_record() {
    let backend = Arc::new(MemoryStorage::default());
    backend.set(STORAGE_KEY, "{not json");
    let store = SessionStore::with_backend(backend);
    assert_eq!(store.read(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn read_rejects_partial_session_with_empty_token() {
    let backend = Arc::new(MemoryStorage::default());
    backend.set(
        STORAGE_KEY,
        r#"{"token":"","tokenType":"Bearer","user":{"id":1,"nombre":"Ana","email":"a@b.com"}}"#,
    );
    let store = SessionStore::with_backend(backend);
    assert_eq!(store.read(), None);
}

#[test]
fn read_rejects_session_with_invalid_user_id() {
    let backend = Arc::new(MemoryStorage::default());
    backend.set(
        STORAGE_KEY,
        r#"{"token":"T","tokenType":"Bearer","user":{"id":0,"nombre":"Ana","email":"a@b.com"}}"#,
    );
    let store = SessionStore::with_backend(backend);
    assert_eq!(store.read(), None);
}

// =============================================================
// Round-trip and replacement
// =============================================================

#[test]
fn write_then_read_round_trips() {
    let store = memory_store();
    let user = sample_user();
    store.write("T", "Bearer", &user);

    let session = store.read().unwrap();
    assert_eq!(session.token, "T");
    assert_eq!(session.token_type, "Bearer");
    assert_eq!(session.user, user);
}

#[test]
fn write_replaces_prior_session_entirely() {
    let store = memory_store();
    store.write("T1", "Bearer", &sample_user());

    let other = User {
        id: 2,
        nombre: "Luis".to_owned(),
        email: "l@b.com".to_owned(),
        roles: Vec::new(),
        permissions: Vec::new(),
    };
    store.write("T2", "Bearer", &other);

    let session = store.read().unwrap();
    assert_eq!(session.token, "T2");
    assert_eq!(session.user.id, 2);
    assert!(session.user.roles.is_empty());
}

#[test]
fn persisted_record_uses_camel_case_token_type_key() {
    let backend = Arc::new(MemoryStorage::default());
    let store = SessionStore::with_backend(backend.clone());
    store.write("T", "Bearer", &sample_user());

    let raw = backend.get(STORAGE_KEY).unwrap();
    assert!(raw.contains(r#""tokenType":"Bearer""#));
}

#[test]
fn write_mirrors_token_under_legacy_key() {
    let backend = Arc::new(MemoryStorage::default());
    let store = SessionStore::with_backend(backend.clone());
    store.write("T", "Bearer", &sample_user());
    assert_eq!(backend.get(LEGACY_TOKEN_KEY).as_deref(), Some("T"));
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_removes_session_and_legacy_key() {
    let backend = Arc::new(MemoryStorage::default());
    let store = SessionStore::with_backend(backend.clone());
    store.write("T", "Bearer", &sample_user());

    store.clear();
    assert_eq!(store.read(), None);
    assert_eq!(backend.get(STORAGE_KEY), None);
    assert_eq!(backend.get(LEGACY_TOKEN_KEY), None);
}

#[test]
fn clear_is_idempotent() {
    let store = memory_store();
    store.write("T", "Bearer", &sample_user());
    store.clear();
    store.clear();
    assert_eq!(store.read(), None);
}

// =============================================================
// Projections
// =============================================================

#[test]
fn token_and_current_user_project_the_record() {
    let store = memory_store();
    assert_eq!(store.token(), None);
    assert_eq!(store.current_user(), None);

    store.write("T", "Bearer", &sample_user());
    assert_eq!(store.token().as_deref(), Some("T"));
    assert_eq!(store.current_user().unwrap().nombre, "Ana");
}

#[test]
fn is_authenticated_reflects_presence() {
    let store = memory_store();
    assert!(!store.is_authenticated());
    store.write("T", "Bearer", &sample_user());
    assert!(store.is_authenticated());
    store.clear();
    assert!(!store.is_authenticated());
}

#[test]
fn authorization_pairs_scheme_and_token() {
    let session = Session {
        token: "T".to_owned(),
        token_type: "Bearer".to_owned(),
        user: sample_user(),
    };
    assert_eq!(session.authorization(), "Bearer T");
}

#[test]
fn clones_share_the_same_backend() {
    let store = memory_store();
    let clone = store.clone();
    store.write("T", "Bearer", &sample_user());
    assert!(clone.is_authenticated());
    clone.clear();
    assert!(!store.is_authenticated());
}
