use std::sync::Arc;

use gate::{IdentityState, MemoryCache, Role, SessionRecord, Subject};

use super::*;

fn store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryCache::new()))
}

#[test]
fn bridge_starts_from_current_snapshot() {
    Owner::new().with(|| {
        let store = store();
        let (snapshot, _sub) = bridge_store(&store);
        assert_eq!(snapshot.get_untracked(), store.snapshot());
        assert!(snapshot.get_untracked().is_pending());
    });
}

#[test]
fn bridge_follows_identity_changes() {
    Owner::new().with(|| {
        let store = store();
        let (snapshot, _sub) = bridge_store(&store);
        store.apply_identity(Some(&Subject::new("u-1")));
        assert_eq!(snapshot.get_untracked().identity, IdentityState::Authenticated(Subject::new("u-1")));
        store.apply_identity(None);
        assert_eq!(snapshot.get_untracked().identity, IdentityState::Unauthenticated);
    });
}

#[test]
fn bridge_sees_role_recorded_before_identity() {
    Owner::new().with(|| {
        let store = store();
        let (snapshot, _sub) = bridge_store(&store);
        store.record_session(&SessionRecord { uid: "u-1".to_owned(), user_type: Role::Buyer, ..SessionRecord::default() });
        store.apply_identity(Some(&Subject::new("u-1")));
        assert_eq!(snapshot.get_untracked().role(), Role::Buyer);
    });
}

#[test]
fn bridge_stops_after_unsubscribe() {
    Owner::new().with(|| {
        let store = store();
        let (snapshot, sub) = bridge_store(&store);
        sub.unsubscribe();
        sub.unsubscribe();
        store.apply_identity(None);
        assert!(snapshot.get_untracked().is_pending());
    });
}

#[test]
fn bridge_ignores_older_snapshots() {
    Owner::new().with(|| {
        let store = store();
        let (snapshot, _sub) = bridge_store(&store);
        store.apply_identity(None);
        let newest = snapshot.get_untracked().version;
        snapshot.set(SessionSnapshot { version: newest + 10, ..SessionSnapshot::default() });
        store.apply_identity(Some(&Subject::new("late")));
        assert_eq!(snapshot.get_untracked().version, newest + 10);
    });
}
