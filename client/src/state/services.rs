//! Process-wide service handles shared through Leptos context.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::sync::Arc;

use gate::{IdentityProvider, SessionCache, SessionRecord, SessionStore, Subject};

use crate::config::ClientConfig;
use crate::state::identity::{BrowserIdentity, Issued};
use crate::util::session_cache::LocalStorageCache;

/// Message shown when a page needs a token and nobody is signed in.
pub const NOT_SIGNED_IN: &str = "You are not signed in.";

/// Configuration, identity session, and session store. Cloning shares state.
#[derive(Clone)]
pub struct Services {
    pub config: Arc<ClientConfig>,
    pub identity: BrowserIdentity,
    pub store: SessionStore,
}

impl Services {
    /// Services backed by browser `localStorage`.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_cache(config, Arc::new(LocalStorageCache))
    }

    pub fn with_cache(config: ClientConfig, cache: Arc<dyn SessionCache>) -> Self {
        let config = Arc::new(config);
        Self { identity: BrowserIdentity::new(Arc::clone(&config)), store: SessionStore::new(cache), config }
    }

    /// Cache `record`, then sign `issued` in.
    ///
    /// The record must be cached first so the subject and its role reach
    /// the guards in the same snapshot.
    pub fn establish(&self, record: &SessionRecord, issued: Issued) {
        self.store.record_session(record);
        self.identity.commit(issued);
    }

    /// Clear the cached record and sign out.
    pub fn logout(&self) {
        log::info!("logging out");
        self.store.clear_session();
        self.identity.sign_out();
    }

    /// Bearer token for the signed-in subject, if any.
    pub async fn bearer(&self) -> Option<String> {
        self.authorized().await.map(|(_, token)| token)
    }

    /// Signed-in subject together with its bearer token.
    pub async fn authorized(&self) -> Option<(Subject, String)> {
        let subject = self.identity.current_subject()?;
        match self.identity.id_token(&subject).await {
            Ok(token) => Some((subject, token)),
            Err(e) => {
                log::warn!("no bearer token: {e}");
                None
            }
        }
    }

    /// [`Services::authorized`] as a page-level error.
    ///
    /// # Errors
    ///
    /// Returns [`NOT_SIGNED_IN`] when no token can be issued.
    pub async fn require_authorized(&self) -> Result<(Subject, String), String> {
        self.authorized().await.ok_or_else(|| NOT_SIGNED_IN.to_owned())
    }

    /// Bearer token or [`NOT_SIGNED_IN`].
    ///
    /// # Errors
    ///
    /// Returns [`NOT_SIGNED_IN`] when no token can be issued.
    pub async fn require_bearer(&self) -> Result<String, String> {
        self.require_authorized().await.map(|(_, token)| token)
    }
}
