//! Identity-provider contract and an in-process implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider is the live source of truth for *who* is signed in.
//! It notifies subscribers asynchronously whenever the signed-in subject
//! changes and issues bearer tokens for backend calls. The browser client
//! wraps [`LocalIdentity`] and drives it from the remote identity service.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::listeners::{Listeners, Subscription};

/// A signed-in subject as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject {
    pub uid: String,
    pub email: Option<String>,
}

impl Subject {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into(), email: None }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Tri-state resolution of the live sign-in state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IdentityState {
    /// Not yet resolved; nothing protected may render.
    #[default]
    Unknown,
    Authenticated(Subject),
    Unauthenticated,
}

impl IdentityState {
    /// State carried by a provider change notification.
    #[must_use]
    pub fn from_event(subject: Option<&Subject>) -> Self {
        subject.map_or(Self::Unauthenticated, |s| Self::Authenticated(s.clone()))
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn subject(&self) -> Option<&Subject> {
        match self {
            Self::Authenticated(subject) => Some(subject),
            _ => None,
        }
    }
}

/// Failure reported by an identity provider.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already in use")]
    EmailInUse,
    #[error("password is too weak")]
    WeakPassword,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("network request failed: {0}")]
    Network(String),
    #[error("no signed-in subject")]
    NotSignedIn,
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Signed-in subject together with its current bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub subject: Subject,
    pub id_token: String,
}

/// Contract every identity backend fulfils.
///
/// `subscribe` delivers the current state immediately when it is already
/// resolved, then once per subsequent transition.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(Option<&Subject>) + Send + Sync + 'static;

    fn current_subject(&self) -> Option<Subject>;

    /// Bearer token for `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::NotSignedIn`] when `subject` is not the
    /// signed-in subject.
    async fn id_token(&self, subject: &Subject) -> Result<String, IdentityError>;
}

#[derive(Debug, Default)]
struct IdentityInner {
    resolved: bool,
    credential: Option<Credential>,
}

/// In-process identity state with change notification.
///
/// Holds no network logic; callers decide when a credential is committed or
/// revoked. Cloning shares the same state.
#[derive(Clone, Default)]
pub struct LocalIdentity {
    inner: Arc<Mutex<IdentityInner>>,
    listeners: Listeners<Option<Subject>>,
}

impl LocalIdentity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign `credential` in and notify subscribers.
    pub fn commit(&self, credential: Credential) {
        let subject = credential.subject.clone();
        {
            let mut inner = self.lock();
            inner.resolved = true;
            inner.credential = Some(credential);
        }
        self.listeners.emit(&Some(subject));
    }

    /// Sign out (or resolve to signed-out) and notify subscribers.
    pub fn sign_out(&self) {
        {
            let mut inner = self.lock();
            inner.resolved = true;
            inner.credential = None;
        }
        self.listeners.emit(&None);
    }

    /// Sign out only if `id_token` is still the active token.
    ///
    /// Returns whether a sign-out happened. Used for token expiry, where a
    /// newer sign-in must not be revoked by an older timer.
    pub fn revoke_token(&self, id_token: &str) -> bool {
        let active = self.lock().credential.as_ref().is_some_and(|c| c.id_token == id_token);
        if active {
            self.sign_out();
        }
        active
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.lock().resolved
    }

    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.lock().credential.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, IdentityInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl IdentityProvider for LocalIdentity {
    fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(Option<&Subject>) + Send + Sync + 'static,
    {
        let on_change = Arc::new(on_change);
        let relay = Arc::clone(&on_change);
        let subscription = self.listeners.subscribe(move |subject: &Option<Subject>| relay(subject.as_ref()));

        let current = {
            let inner = self.lock();
            inner.resolved.then(|| inner.credential.as_ref().map(|c| c.subject.clone()))
        };
        if let Some(subject) = current {
            on_change(subject.as_ref());
        }
        subscription
    }

    fn current_subject(&self) -> Option<Subject> {
        self.lock().credential.as_ref().map(|c| c.subject.clone())
    }

    async fn id_token(&self, subject: &Subject) -> Result<String, IdentityError> {
        match self.lock().credential.as_ref() {
            Some(credential) if credential.subject.uid == subject.uid => Ok(credential.id_token.clone()),
            _ => Err(IdentityError::NotSignedIn),
        }
    }
}
