//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so endpoint bases
//! are read with `option_env!` when the crate is compiled. Defaults match
//! the local development ports of each backend service.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_RECOMMEND_URL: &str = "";
pub const DEFAULT_PAIR_URL: &str = "http://localhost:8060";
pub const DEFAULT_DISEASE_URL: &str = "http://localhost:7000";

/// Endpoint bases and keys for every service the UI talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Main REST backend (`/gaupal/...`).
    pub server_url: String,
    /// Identity Toolkit REST base.
    pub identity_url: String,
    pub identity_api_key: String,
    /// Breeding recommendation service; empty means same origin.
    pub recommend_url: String,
    /// Breeding-pair predictor.
    pub pair_url: String,
    /// Disease predictor.
    pub disease_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None, None, None, None)
    }
}

impl ClientConfig {
    /// Build from the compile-time environment.
    ///
    /// Recognised variables: `GAUPAL_SERVER_URL`, `GAUPAL_IDENTITY_URL`,
    /// `GAUPAL_FIREBASE_API_KEY`, `GAUPAL_RECOMMEND_URL`, `GAUPAL_PAIR_URL`,
    /// `GAUPAL_DISEASE_URL`.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("GAUPAL_SERVER_URL"),
            option_env!("GAUPAL_IDENTITY_URL"),
            option_env!("GAUPAL_FIREBASE_API_KEY"),
            option_env!("GAUPAL_RECOMMEND_URL"),
            option_env!("GAUPAL_PAIR_URL"),
            option_env!("GAUPAL_DISEASE_URL"),
        )
    }

    /// Apply defaults and normalise trailing slashes.
    #[must_use]
    pub fn from_parts(
        server_url: Option<&str>,
        identity_url: Option<&str>,
        identity_api_key: Option<&str>,
        recommend_url: Option<&str>,
        pair_url: Option<&str>,
        disease_url: Option<&str>,
    ) -> Self {
        Self {
            server_url: base(server_url, DEFAULT_SERVER_URL),
            identity_url: base(identity_url, DEFAULT_IDENTITY_URL),
            identity_api_key: identity_api_key.map(str::trim).unwrap_or_default().to_owned(),
            recommend_url: base(recommend_url, DEFAULT_RECOMMEND_URL),
            pair_url: base(pair_url, DEFAULT_PAIR_URL),
            disease_url: base(disease_url, DEFAULT_DISEASE_URL),
        }
    }
}

fn base(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_owned()
}

/// Join a base URL and an absolute path.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
