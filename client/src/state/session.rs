//! Reactive view of the session store.
//!
//! ARCHITECTURE
//! ============
//! The app keeps exactly two subscriptions for its whole lifetime: the store
//! listens to the identity provider ([`SessionStore::attach`]) and this
//! bridge listens to the store. Everything else reads the one
//! `RwSignal<SessionSnapshot>` placed in context, so guards stay pure
//! projections of it. Snapshots older than the one already held are dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gate::{SessionSnapshot, SessionStore, Subscription};
use leptos::prelude::*;

use crate::state::services::Services;

/// Mirror `store` into a signal. The returned subscription keeps it live.
pub fn bridge_store(store: &SessionStore) -> (RwSignal<SessionSnapshot>, Subscription) {
    let snapshot = RwSignal::new(store.snapshot());
    let subscription = store.subscribe(move |next| {
        let fresh = snapshot.try_with_untracked(|current| next.supersedes(current.version)).unwrap_or(false);
        if fresh && snapshot.try_set(next.clone()).is_some() {
            log::debug!("session signal disposed; snapshot dropped");
        }
    });
    (snapshot, subscription)
}

/// Wire identity into the store, bridge the store into context, and release
/// both subscriptions when the owner is cleaned up.
pub fn provide_session(services: &Services) -> RwSignal<SessionSnapshot> {
    let (snapshot, bridged) = bridge_store(&services.store);
    let attached = services.store.attach(&services.identity);
    provide_context(snapshot);
    on_cleanup(move || {
        attached.unsubscribe();
        bridged.unsubscribe();
    });
    snapshot
}

/// Session snapshot provided by [`provide_session`].
pub fn use_session() -> RwSignal<SessionSnapshot> {
    expect_context::<RwSignal<SessionSnapshot>>()
}
