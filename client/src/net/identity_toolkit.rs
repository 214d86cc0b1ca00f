//! Identity Toolkit REST calls (email/password accounts).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error; identity is only ever
//! resolved in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Provider error codes (`EMAIL_EXISTS`, `INVALID_PASSWORD`, ...) are mapped
//! onto [`IdentityError`] so pages can phrase messages without knowing the
//! wire format.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_toolkit_test.rs"]
mod identity_toolkit_test;

use gate::{IdentityError, Subject};
use serde::Deserialize;

use crate::config::ClientConfig;

/// Token grant returned by `signInWithPassword` and `signUp`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenGrant {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id_token: String,
    /// Lifetime in seconds, sent as a decimal string.
    #[serde(default)]
    pub expires_in: Option<String>,
}

/// Token lifetime when the provider omits or garbles `expiresIn`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: u32 = 3600;

impl TokenGrant {
    #[must_use]
    pub fn subject(&self) -> Subject {
        let subject = Subject::new(self.local_id.clone());
        match &self.email {
            Some(email) => subject.with_email(email.clone()),
            None => subject,
        }
    }

    #[must_use]
    pub fn lifetime_secs(&self) -> u32 {
        self.expires_in
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn accounts_endpoint(base: &str, method: &str, api_key: &str) -> String {
    format!("{}/accounts:{method}?key={api_key}", base.trim_end_matches('/'))
}

/// Map a provider error code such as `"WEAK_PASSWORD : Password should be at
/// least 6 characters"` onto an [`IdentityError`].
#[must_use]
pub fn map_error_code(message: &str) -> IdentityError {
    let code = message.split([' ', ':']).next().unwrap_or_default();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED" => {
            IdentityError::InvalidCredentials
        }
        "EMAIL_EXISTS" => IdentityError::EmailInUse,
        "WEAK_PASSWORD" => IdentityError::WeakPassword,
        "INVALID_EMAIL" | "MISSING_EMAIL" => IdentityError::InvalidEmail,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => IdentityError::Provider("too many attempts, try again later".to_owned()),
        _ => IdentityError::Provider(message.to_owned()),
    }
}

/// Decode an error response body.
#[must_use]
pub fn error_from_body(status: u16, body: &str) -> IdentityError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => map_error_code(&envelope.error.message),
        _ => IdentityError::Provider(format!("identity request failed: {status}")),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn first_subject(body: LookupResponse) -> Result<Subject, IdentityError> {
    let user = body.users.into_iter().next().ok_or(IdentityError::NotSignedIn)?;
    let subject = Subject::new(user.local_id);
    Ok(match user.email {
        Some(email) => subject.with_email(email),
        None => subject,
    })
}

#[cfg(feature = "hydrate")]
async fn post_accounts<T: serde::de::DeserializeOwned>(
    config: &ClientConfig,
    method: &str,
    body: &serde_json::Value,
) -> Result<T, IdentityError> {
    let url = accounts_endpoint(&config.identity_url, method, &config.identity_api_key);
    let resp = gloo_net::http::Request::post(&url)
        .json(body)
        .map_err(|e| IdentityError::Provider(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(error_from_body(status, &text));
    }
    resp.json::<T>().await.map_err(|e| IdentityError::Provider(e.to_string()))
}

/// Exchange email and password for a token grant.
///
/// # Errors
///
/// Returns the mapped provider error, or [`IdentityError::Network`] when the
/// request could not be sent.
pub async fn sign_in_with_password(config: &ClientConfig, email: &str, password: &str) -> Result<TokenGrant, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
        post_accounts(config, "signInWithPassword", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(IdentityError::Network("not available on server".to_owned()))
    }
}

/// Create an email/password account and sign it in.
///
/// # Errors
///
/// Returns the mapped provider error (`EmailInUse`, `WeakPassword`, ...).
pub async fn sign_up(config: &ClientConfig, email: &str, password: &str) -> Result<TokenGrant, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
        post_accounts(config, "signUp", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, email, password);
        Err(IdentityError::Network("not available on server".to_owned()))
    }
}

/// Resolve the subject an ID token belongs to; fails once the token expired.
///
/// # Errors
///
/// Returns [`IdentityError::NotSignedIn`] when the token matches no account.
pub async fn lookup(config: &ClientConfig, id_token: &str) -> Result<Subject, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "idToken": id_token });
        let resp: LookupResponse = post_accounts(config, "lookup", &body).await?;
        first_subject(resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, id_token);
        Err(IdentityError::Network("not available on server".to_owned()))
    }
}
