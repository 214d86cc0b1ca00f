//! Single authoritative session state.
//!
//! ARCHITECTURE
//! ============
//! Live identity events and the cached session record reconcile into one
//! [`SessionSnapshot`]. Each change bumps a version and is published to the
//! store's own listeners, so consumers see one consistent picture instead of
//! racing a provider subscription against ad-hoc cache reads.
//!
//! Reconciliation rules:
//! - `Authenticated(s)`: the cached record is projected only if it
//!   [belongs to](SessionRecord::belongs_to) `s`; a record left over from
//!   another subject is treated as stale and projects no role.
//! - `Unauthenticated` / `Unknown`: no record is projected. The cache itself
//!   is left alone; only an explicit logout clears it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::cache::SessionCache;
use crate::identity::{IdentityProvider, IdentityState, Subject};
use crate::listeners::{Listeners, Subscription};
use crate::record::{Role, SessionRecord};

/// Immutable view of the session at one version.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Increases by one on every published change.
    pub version: u64,
    pub identity: IdentityState,
    /// Cached record, present only when it belongs to the live subject.
    pub record: Option<SessionRecord>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn role(&self) -> Role {
        self.record.as_ref().map_or(Role::Unknown, |r| r.user_type)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.identity.is_resolved()
    }

    #[must_use]
    pub fn subject(&self) -> Option<&Subject> {
        self.identity.subject()
    }

    /// Whether `self` is newer than a snapshot at `version`.
    #[must_use]
    pub fn supersedes(&self, version: u64) -> bool {
        self.version > version
    }
}

/// Process-wide session store. Cloning shares the same state.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<Mutex<SessionSnapshot>>,
    cache: Arc<dyn SessionCache>,
    listeners: Listeners<SessionSnapshot>,
}

impl SessionStore {
    pub fn new(cache: Arc<dyn SessionCache>) -> Self {
        Self { state: Arc::new(Mutex::new(SessionSnapshot::default())), cache, listeners: Listeners::new() }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Listen for published snapshots.
    pub fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        self.listeners.subscribe(on_change)
    }

    /// Feed `provider` into the store through one subscription.
    ///
    /// This is the only place the app subscribes to identity changes; release
    /// the returned handle at teardown.
    pub fn attach<P: IdentityProvider>(&self, provider: &P) -> Subscription {
        let store = self.clone();
        provider.subscribe(move |subject| store.apply_identity(subject))
    }

    /// Reconcile a provider change notification.
    pub fn apply_identity(&self, subject: Option<&Subject>) {
        let identity = IdentityState::from_event(subject);
        let record = self.reconcile(&identity);
        self.publish(|snapshot| {
            snapshot.identity = identity;
            snapshot.record = record;
        });
    }

    /// Persist a freshly issued record (login, signup) and re-project it.
    ///
    /// Login flows call this *before* committing the identity credential so
    /// the role is already cached when the subject appears.
    pub fn record_session(&self, record: &SessionRecord) {
        self.cache.write(record);
        let identity = self.snapshot().identity;
        let projected = self.reconcile(&identity);
        self.publish(|snapshot| snapshot.record = projected);
    }

    /// Drop the cached record (logout).
    pub fn clear_session(&self) {
        self.cache.clear();
        self.publish(|snapshot| snapshot.record = None);
    }

    fn reconcile(&self, identity: &IdentityState) -> Option<SessionRecord> {
        let subject = identity.subject()?;
        let record = self.cache.read()?;
        if record.belongs_to(subject) {
            Some(record)
        } else {
            log::warn!("cached session belongs to another subject; ignoring its role");
            None
        }
    }

    fn publish<F>(&self, change: F)
    where
        F: FnOnce(&mut SessionSnapshot),
    {
        let next = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            change(&mut state);
            state.version += 1;
            state.clone()
        };
        self.listeners.emit(&next);
    }
}
