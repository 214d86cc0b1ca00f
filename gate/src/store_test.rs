use std::sync::Mutex;

use super::*;
use crate::cache::MemoryCache;
use crate::identity::{Credential, LocalIdentity};

fn record(uid: &str, role: Role) -> SessionRecord {
    SessionRecord { uid: uid.to_owned(), user_type: role, ..SessionRecord::default() }
}

fn credential(uid: &str) -> Credential {
    Credential { subject: Subject::new(uid), id_token: format!("token-{uid}") }
}

fn store_with(cache: MemoryCache) -> (SessionStore, Arc<MemoryCache>) {
    let cache = Arc::new(cache);
    (SessionStore::new(cache.clone()), cache)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_store_is_pending_with_unknown_role() {
    let (store, _) = store_with(MemoryCache::new());
    let snap = store.snapshot();
    assert!(snap.is_pending());
    assert_eq!(snap.role(), Role::Unknown);
    assert_eq!(snap.version, 0);
}

#[test]
fn pending_store_does_not_project_cached_record() {
    let cache = MemoryCache::new();
    cache.write(&record("u-1", Role::Farmer));
    let (store, _) = store_with(cache);
    assert!(store.snapshot().record.is_none());
}

// =============================================================
// apply_identity reconciliation
// =============================================================

#[test]
fn authenticated_subject_projects_matching_record() {
    let cache = MemoryCache::new();
    cache.write(&record("u-1", Role::Farmer));
    let (store, _) = store_with(cache);
    store.apply_identity(Some(&Subject::new("u-1")));
    let snap = store.snapshot();
    assert_eq!(snap.role(), Role::Farmer);
    assert_eq!(snap.subject().map(|s| s.uid.as_str()), Some("u-1"));
}

#[test]
fn stale_record_from_other_subject_projects_unknown_role() {
    let cache = MemoryCache::new();
    cache.write(&record("u-old", Role::Farmer));
    let (store, cache) = store_with(cache);
    store.apply_identity(Some(&Subject::new("u-new")));
    assert_eq!(store.snapshot().role(), Role::Unknown);
    assert!(cache.read().is_some(), "stale entry is not destroyed by reconciliation");
}

#[test]
fn malformed_cache_projects_unknown_role() {
    let (store, _) = store_with(MemoryCache::with_raw("not-json"));
    store.apply_identity(Some(&Subject::new("u-1")));
    let snap = store.snapshot();
    assert!(!snap.is_pending());
    assert_eq!(snap.role(), Role::Unknown);
}

#[test]
fn mistyped_profile_field_still_projects_cached_role() {
    for raw in [
        r#"{"uid":"u1","userType":"farmer","phone":9876543210}"#,
        r#"{"uid":"u1","userType":"farmer","fullName":null}"#,
    ] {
        let (store, _) = store_with(MemoryCache::with_raw(raw));
        store.apply_identity(Some(&Subject::new("u1")));
        assert_eq!(store.snapshot().role(), Role::Farmer, "raw: {raw}");
    }
}

#[test]
fn unauthenticated_drops_record_but_keeps_cache() {
    let cache = MemoryCache::new();
    cache.write(&record("u-1", Role::Buyer));
    let (store, cache) = store_with(cache);
    store.apply_identity(Some(&Subject::new("u-1")));
    store.apply_identity(None);
    let snap = store.snapshot();
    assert_eq!(snap.identity, IdentityState::Unauthenticated);
    assert!(snap.record.is_none());
    assert!(cache.read().is_some());
}

// =============================================================
// record_session / clear_session
// =============================================================

#[test]
fn record_session_before_identity_is_picked_up_on_commit() {
    let (store, _) = store_with(MemoryCache::new());
    store.apply_identity(None);
    store.record_session(&record("u-1", Role::Buyer));
    assert!(store.snapshot().record.is_none());
    store.apply_identity(Some(&Subject::new("u-1")));
    assert_eq!(store.snapshot().role(), Role::Buyer);
}

#[test]
fn record_session_round_trips_role_and_uid_through_cache() {
    let (store, cache) = store_with(MemoryCache::new());
    store.apply_identity(Some(&Subject::new("u-7")));
    store.record_session(&record("u-7", Role::Farmer));
    let read = cache.read().expect("cached");
    assert_eq!(read.uid, "u-7");
    assert_eq!(read.user_type, Role::Farmer);
    assert_eq!(store.snapshot().role(), Role::Farmer);
}

#[test]
fn clear_session_removes_cache_and_projection() {
    let (store, cache) = store_with(MemoryCache::new());
    store.apply_identity(Some(&Subject::new("u-1")));
    store.record_session(&record("u-1", Role::Farmer));
    store.clear_session();
    assert!(cache.read().is_none());
    assert_eq!(store.snapshot().role(), Role::Unknown);
}

// =============================================================
// Versioning and publication
// =============================================================

#[test]
fn every_change_bumps_version_and_publishes() {
    let (store, _) = store_with(MemoryCache::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_cb = Arc::clone(&seen);
    let _sub = store.subscribe(move |snap| seen_cb.lock().unwrap().push(snap.version));
    store.apply_identity(None);
    store.record_session(&record("u-1", Role::Farmer));
    store.clear_session();
    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(store.snapshot().version, 3);
}

#[test]
fn supersedes_compares_versions() {
    let snap = SessionSnapshot { version: 4, ..SessionSnapshot::default() };
    assert!(snap.supersedes(3));
    assert!(!snap.supersedes(4));
    assert!(!snap.supersedes(9));
}

// =============================================================
// attach: one subscription feeding the store
// =============================================================

#[test]
fn attach_follows_provider_transitions() {
    let cache = MemoryCache::new();
    cache.write(&record("u-1", Role::Farmer));
    let (store, _) = store_with(cache);
    let identity = LocalIdentity::new();
    let _sub = store.attach(&identity);
    assert!(store.snapshot().is_pending());

    identity.commit(credential("u-1"));
    assert_eq!(store.snapshot().role(), Role::Farmer);

    identity.sign_out();
    assert_eq!(store.snapshot().identity, IdentityState::Unauthenticated);
}

#[test]
fn attach_after_resolution_syncs_immediately() {
    let (store, _) = store_with(MemoryCache::new());
    let identity = LocalIdentity::new();
    identity.sign_out();
    let _sub = store.attach(&identity);
    assert_eq!(store.snapshot().identity, IdentityState::Unauthenticated);
}

#[test]
fn detached_store_ignores_provider() {
    let (store, _) = store_with(MemoryCache::new());
    let identity = LocalIdentity::new();
    let sub = store.attach(&identity);
    sub.unsubscribe();
    identity.commit(credential("u-1"));
    assert!(store.snapshot().is_pending());
}
