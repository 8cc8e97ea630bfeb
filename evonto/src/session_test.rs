use super::*;
use crate::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn store() -> (Arc<MemoryStorage>, SessionStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone());
    (storage, store)
}

fn profile(username: &str) -> UserProfile {
    UserProfile::new(serde_json::json!({ "username": username, "email": format!("{username}@b.com") }))
}

// =============================================================
// establish / rotate
// =============================================================

#[test]
fn empty_store_has_no_session() {
    let (_, store) = store();
    assert_eq!(store.snapshot(), Session::default());
    assert!(!store.snapshot().has_token());
}

#[test]
fn establish_sets_token_and_profile_together() {
    let (storage, store) = store();
    store.establish("tok123", profile("a")).unwrap();

    let session = store.snapshot();
    assert_eq!(session.token.as_deref(), Some("tok123"));
    assert_eq!(session.user.as_ref().and_then(UserProfile::username), Some("a"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok123"));
}

#[test]
fn rotate_without_profile_keeps_existing_profile() {
    let (_, store) = store();
    store.establish("tok1", profile("a")).unwrap();
    store.rotate_token("tok2", None).unwrap();

    let session = store.snapshot();
    assert_eq!(session.token.as_deref(), Some("tok2"));
    assert_eq!(session.user, Some(profile("a")));
}

#[test]
fn rotate_with_profile_replaces_it() {
    let (_, store) = store();
    store.establish("tok1", profile("a")).unwrap();
    store.rotate_token("tok2", Some(profile("b"))).unwrap();
    assert_eq!(store.user(), Some(profile("b")));
}

#[test]
fn empty_stored_token_reads_as_absent() {
    let (storage, store) = store();
    storage.set(TOKEN_KEY, "").unwrap();
    assert_eq!(store.token(), None);
}

#[test]
fn corrupt_profile_reads_as_absent() {
    let (storage, store) = store();
    storage.set(USER_INFO_KEY, "{not json").unwrap();
    assert_eq!(store.user(), None);
}

#[test]
fn non_object_profile_is_kept_verbatim() {
    let (_, store) = store();
    store
        .rotate_token("tok", Some(UserProfile::new(serde_json::json!("Token is valid for user: a"))))
        .unwrap();
    let user = store.user().unwrap();
    assert_eq!(user.as_json(), &serde_json::json!("Token is valid for user: a"));
    assert_eq!(user.username(), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_legacy_keys() {
    let (storage, store) = store();
    store.establish("tok", profile("a")).unwrap();
    for key in LEGACY_KEYS {
        storage.set(key, "stale").unwrap();
    }
    storage.set("theme", "dark").unwrap();

    store.logout();

    assert_eq!(store.snapshot(), Session::default());
    for key in LEGACY_KEYS {
        assert_eq!(storage.get(key), None, "{key} should be cleared");
    }
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
}

#[test]
fn logout_is_idempotent() {
    let (storage, store) = store();
    store.logout();
    store.logout();
    assert!(storage.is_empty());
}

// =============================================================
// subscriptions
// =============================================================

#[test]
fn subscribers_see_every_mutation() {
    let (_, store) = store();
    let seen = Arc::new(Mutex::new(Vec::<Session>::new()));
    let sink = seen.clone();
    store.subscribe(move |session| sink.lock().push(session.clone()));

    store.establish("tok", profile("a")).unwrap();
    store.logout();

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].token.as_deref(), Some("tok"));
    assert_eq!(seen[1], Session::default());
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let (_, store) = store();
    let calls = Arc::new(AtomicU64::new(0));
    let counter = calls.clone();
    let id = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    store.logout();
    store.unsubscribe(id);
    store.logout();

    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn listener_may_read_store_reentrantly() {
    let storage = Arc::new(MemoryStorage::new());
    let store = Arc::new(SessionStore::new(storage));
    let observed = Arc::new(Mutex::new(None::<String>));
    let inner = store.clone();
    let sink = observed.clone();
    store.subscribe(move |_| {
        *sink.lock() = inner.token();
    });

    store.establish("tok", profile("a")).unwrap();

    assert_eq!(observed.lock().as_deref(), Some("tok"));
}
