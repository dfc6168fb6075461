use super::*;
use crate::state::auth::AuthPhase;

fn store() -> SessionStore<MemoryStorage> {
    SessionStore::new(MemoryStorage::default())
}

#[test]
fn read_empty_store_yields_empty_session() {
    assert_eq!(store().read(), Session::default());
}

#[test]
fn write_then_read_round_trips_credentials() {
    let store = store();
    store.write("t1", "user", "u1");
    let session = store.read();
    assert_eq!(session.token.as_deref(), Some("t1"));
    assert_eq!(session.role, Some(Role::User));
    assert_eq!(session.user_id.as_deref(), Some("u1"));
}

#[test]
fn write_uses_expected_storage_keys() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(storage);
    store.write("t1", "admin", "u1");
    let storage = &store.storage;
    assert_eq!(storage.get("token").as_deref(), Some("t1"));
    assert_eq!(storage.get("role").as_deref(), Some("admin"));
    assert_eq!(storage.get("userId").as_deref(), Some("u1"));
}

#[test]
fn unknown_role_is_stored_but_reads_as_none() {
    let store = store();
    store.write("t1", "auditor", "u1");
    assert_eq!(store.storage.get(ROLE_KEY).as_deref(), Some("auditor"));
    let session = store.read();
    assert_eq!(session.role, None);
    assert_eq!(session.phase(), AuthPhase::Unauthenticated);
}

#[test]
fn clear_removes_all_three_keys() {
    let store = store();
    store.write("t1", "admin", "u1");
    store.clear();
    assert_eq!(store.read(), Session::default());
    assert!(store.storage.get(TOKEN_KEY).is_none());
    assert!(store.storage.get(ROLE_KEY).is_none());
    assert!(store.storage.get(USER_ID_KEY).is_none());
}

#[test]
fn rewrite_replaces_previous_session() {
    let store = store();
    store.write("t1", "admin", "u1");
    store.write("t2", "user", "u2");
    let session = store.read();
    assert_eq!(session.token.as_deref(), Some("t2"));
    assert_eq!(session.role, Some(Role::User));
    assert_eq!(session.user_id.as_deref(), Some("u2"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let store = browser_store();
    store.write("t1", "admin", "u1");
    assert_eq!(store.read(), Session::default());
}
