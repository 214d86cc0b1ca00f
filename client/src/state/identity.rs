//! Browser identity session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps [`LocalIdentity`] with the remote Identity Toolkit: a persisted
//! credential is restored (and re-verified) on start, sign-in and sign-up
//! return a credential the caller commits once its session record is cached,
//! tokens sign out when they expire, and a sign-out in another tab is
//! mirrored here through the `storage` event.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::Arc;

use gate::{Credential, IdentityError, IdentityProvider, LocalIdentity, Subject, Subscription};
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::net::identity_toolkit::{self, TokenGrant};
use crate::util::storage;

/// Storage key for the persisted credential.
pub const IDENTITY_KEY: &str = "gaupal_identity";

/// Credential plus its lifetime, as issued by sign-in or sign-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issued {
    pub credential: Credential,
    pub lifetime_secs: u32,
}

impl From<TokenGrant> for Issued {
    fn from(grant: TokenGrant) -> Self {
        let lifetime_secs = grant.lifetime_secs();
        Self { credential: Credential { subject: grant.subject(), id_token: grant.id_token }, lifetime_secs }
    }
}

/// Credential as persisted in `localStorage`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCredential {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id_token: String,
    /// Expiry as milliseconds since the Unix epoch.
    pub expires_at: f64,
}

impl PersistedCredential {
    #[must_use]
    pub fn new(issued: &Issued, now_ms: f64) -> Self {
        Self {
            uid: issued.credential.subject.uid.clone(),
            email: issued.credential.subject.email.clone(),
            id_token: issued.credential.id_token.clone(),
            expires_at: now_ms + f64::from(issued.lifetime_secs) * 1000.0,
        }
    }

    #[must_use]
    pub fn credential(&self) -> Credential {
        let subject = Subject::new(self.uid.clone());
        let subject = match &self.email {
            Some(email) => subject.with_email(email.clone()),
            None => subject,
        };
        Credential { subject, id_token: self.id_token.clone() }
    }

    /// Milliseconds until expiry, or `None` once expired.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remaining_ms(&self, now_ms: f64) -> Option<u32> {
        let remaining = self.expires_at - now_ms;
        if remaining <= 0.0 || remaining.is_nan() {
            return None;
        }
        Some(remaining.min(f64::from(u32::MAX)) as u32)
    }
}

/// Identity provider backed by the Identity Toolkit. Cloning shares state.
#[derive(Clone)]
pub struct BrowserIdentity {
    core: LocalIdentity,
    config: Arc<ClientConfig>,
}

impl BrowserIdentity {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self { core: LocalIdentity::new(), config }
    }

    /// Restore a persisted credential, verify it, and resolve identity.
    ///
    /// Always resolves: any failure signs out.
    pub async fn start(&self) {
        self.watch_other_tabs();
        let Some(saved) = storage::load_json::<PersistedCredential>(IDENTITY_KEY) else {
            self.core.sign_out();
            return;
        };
        let Some(remaining) = saved.remaining_ms(now_ms()) else {
            log::info!("persisted credential expired");
            self.sign_out();
            return;
        };
        match identity_toolkit::lookup(&self.config, &saved.id_token).await {
            Ok(subject) if subject.uid == saved.uid => {
                let credential = saved.credential();
                self.schedule_expiry(credential.id_token.clone(), remaining);
                self.core.commit(credential);
            }
            Ok(_) => {
                log::warn!("persisted credential resolved to a different account");
                self.sign_out();
            }
            Err(e) => {
                log::warn!("persisted credential rejected: {e}");
                self.sign_out();
            }
        }
    }

    /// Verify email and password. The credential is not committed.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`IdentityError`].
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Issued, IdentityError> {
        identity_toolkit::sign_in_with_password(&self.config, email, password).await.map(Issued::from)
    }

    /// Create an account. The credential is not committed.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`IdentityError`].
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Issued, IdentityError> {
        identity_toolkit::sign_up(&self.config, email, password).await.map(Issued::from)
    }

    /// Persist `issued`, arm its expiry, and announce the subject.
    pub fn commit(&self, issued: Issued) {
        let now = now_ms();
        let persisted = PersistedCredential::new(&issued, now);
        storage::save_json(IDENTITY_KEY, &persisted);
        if let Some(remaining) = persisted.remaining_ms(now) {
            self.schedule_expiry(issued.credential.id_token.clone(), remaining);
        }
        self.core.commit(issued.credential);
    }

    pub fn sign_out(&self) {
        storage::remove(IDENTITY_KEY);
        self.core.sign_out();
    }

    fn schedule_expiry(&self, id_token: String, delay_ms: u32) {
        #[cfg(feature = "hydrate")]
        {
            let identity = self.clone();
            gloo_timers::callback::Timeout::new(delay_ms, move || {
                if identity.core.revoke_token(&id_token) {
                    log::info!("identity token expired; signed out");
                    storage::remove(IDENTITY_KEY);
                }
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id_token, delay_ms);
        }
    }

    fn watch_other_tabs(&self) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(window) = web_sys::window() else {
                return;
            };
            let core = self.core.clone();
            let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
                if ev.key().as_deref() == Some(IDENTITY_KEY) && ev.new_value().is_none() && core.credential().is_some() {
                    log::info!("signed out in another tab");
                    core.sign_out();
                }
            });
            if window
                .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not watch storage events");
            }
            on_storage.forget();
        }
    }
}

impl IdentityProvider for BrowserIdentity {
    fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(Option<&Subject>) + Send + Sync + 'static,
    {
        self.core.subscribe(on_change)
    }

    fn current_subject(&self) -> Option<Subject> {
        self.core.current_subject()
    }

    async fn id_token(&self, subject: &Subject) -> Result<String, IdentityError> {
        self.core.id_token(subject).await
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
