//! REST API helpers for the Gaupal backend and the prediction services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with "not available on server"; data
//! pages only mount behind the auth guard, which never renders during SSR.
//!
//! ERROR HANDLING
//! ==============
//! Auth calls return [`ApiError`] so pages can branch on the HTTP status
//! (409 on signup, backend `message` on login). Data calls flatten errors to
//! `String` so failures degrade into page messages without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use gate::SessionRecord;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{
    ApiMessage, Article, Cattle, DashboardMetrics, DataList, DiseasePrediction, Event, LoginRequest, LoginResponse,
    NewCattle, PairPrediction, Product, ProductList, Profile, Recommendation, SignupRequest, Vaccination,
    recommendations_from, unwrap_data,
};
use crate::config::{ClientConfig, join};

/// Failed REST call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status; `None` when no response arrived.
    pub status: Option<u16>,
    /// Backend-provided `message`, if any.
    pub message: Option<String>,
    pub detail: String,
}

impl ApiError {
    fn transport(detail: impl fmt::Display) -> Self {
        Self { status: None, message: None, detail: detail.to_string() }
    }

    /// Decode a non-2xx response body.
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.message)
            .filter(|m| !m.trim().is_empty());
        Self { status: Some(status), message, detail: request_failed_message(status) }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(&self.detail),
        }
    }
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Percent-encode a query value.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn cattle_endpoint(uid: &str) -> String {
    format!("/gaupal/cattle/{uid}")
}

fn cattle_item_endpoint(id: &str) -> String {
    format!("/gaupal/cattle/item/{id}")
}

fn vaccinations_endpoint(id: &str) -> String {
    format!("/gaupal/cattle/item/{id}/vaccinations")
}

fn metrics_endpoint(uid: &str) -> String {
    format!("/gaupal/cattle/{uid}/metrics")
}

fn article_endpoint(id: &str) -> String {
    format!("/gaupal/article/{id}")
}

fn product_endpoint(id: &str) -> String {
    format!("/gaupal/products/{id}")
}

fn recommend_endpoint(breed: &str) -> String {
    format!("/recommend?breed={}", encode_component(breed))
}

const RANDOM_ARTICLES: &str = "/gaupal/article/random/article";
const EVENTS: &str = "/gaupal/events?page=1&limit=6";
const PRODUCTS: &str = "/gaupal/products";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Delete,
}

/// Send one request and decode the JSON response (`null` for empty bodies).
async fn request<T: DeserializeOwned>(
    verb: Verb,
    url: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match verb {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Delete => Request::delete(url),
        };
        let builder = match token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        };
        let resp = match body {
            Some(body) => builder.json(body).map_err(ApiError::transport)?.send().await,
            None => builder.send().await,
        }
        .map_err(ApiError::transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(ApiError::transport)?;
        if !resp.ok() {
            log::warn!("{verb:?} {url} -> {status}");
            return Err(ApiError::from_body(status, &text));
        }
        let value = if text.trim().is_empty() { Value::Null } else { serde_json::from_str(&text).map_err(ApiError::transport)? };
        serde_json::from_value(value).map_err(ApiError::transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, url, token, body);
        Err(ApiError::transport("not available on server"))
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(ApiError::transport)
}

// ---------------------------------------------------------------------------
// auth
// ---------------------------------------------------------------------------

/// Exchange a verified identity for the backend's user record.
///
/// # Errors
///
/// Returns the backend status and `message` on rejection.
pub async fn login(config: &ClientConfig, req: &LoginRequest) -> Result<SessionRecord, ApiError> {
    let url = join(&config.server_url, "/gaupal/auth/login");
    let resp: LoginResponse = request(Verb::Post, &url, None, Some(&to_body(req)?)).await?;
    Ok(resp.user)
}

/// Register the profile of a freshly created identity.
///
/// # Errors
///
/// Returns the backend status (409 for a duplicate) and `message`.
pub async fn signup(config: &ClientConfig, id_token: &str, req: &SignupRequest) -> Result<(), ApiError> {
    let url = join(&config.server_url, "/gaupal/auth/signup");
    let _: Value = request(Verb::Post, &url, Some(id_token), Some(&to_body(req)?)).await?;
    Ok(())
}

/// Fetch the signed-in user's profile. Returns `None` on any failure.
pub async fn fetch_profile(config: &ClientConfig, token: &str) -> Option<Profile> {
    let url = join(&config.server_url, "/gaupal/auth/profile");
    match request(Verb::Get, &url, Some(token), None).await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("profile fetch failed: {e}");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// cattle
// ---------------------------------------------------------------------------

/// List the animals registered to `uid`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_cattle(config: &ClientConfig, token: &str, uid: &str) -> Result<Vec<Cattle>, String> {
    let url = join(&config.server_url, &cattle_endpoint(uid));
    let body: Value = request(Verb::Get, &url, Some(token), None).await.map_err(|e| e.to_string())?;
    serde_json::from_value(unwrap_data(body)).map_err(|e| e.to_string())
}

/// Register an animal; returns the stored record.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn add_cattle(config: &ClientConfig, token: &str, uid: &str, cattle: &NewCattle) -> Result<Cattle, String> {
    let url = join(&config.server_url, &cattle_endpoint(uid));
    let body = to_body(&cattle.resolved()).map_err(|e| e.to_string())?;
    let stored: Value = request(Verb::Post, &url, Some(token), Some(&body)).await.map_err(|e| e.to_string())?;
    serde_json::from_value(unwrap_data(stored)).map_err(|e| e.to_string())
}

/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_cattle(config: &ClientConfig, token: &str, id: &str) -> Result<(), String> {
    let url = join(&config.server_url, &cattle_item_endpoint(id));
    let _: Value = request(Verb::Delete, &url, Some(token), None).await.map_err(|e| e.to_string())?;
    Ok(())
}

/// # Errors
///
/// Returns an error string if the request fails.
pub async fn add_vaccination(config: &ClientConfig, token: &str, id: &str, record: &Vaccination) -> Result<(), String> {
    let url = join(&config.server_url, &vaccinations_endpoint(id));
    let body = to_body(record).map_err(|e| e.to_string())?;
    let _: Value = request(Verb::Post, &url, Some(token), Some(&body)).await.map_err(|e| e.to_string())?;
    Ok(())
}

pub async fn fetch_metrics(config: &ClientConfig, token: &str, uid: &str) -> Option<DashboardMetrics> {
    let url = join(&config.server_url, &metrics_endpoint(uid));
    let body: Value = request(Verb::Get, &url, Some(token), None).await.ok()?;
    serde_json::from_value(unwrap_data(body)).ok()
}

/// Breeding recommendations for `breed`. A non-array body is an empty list.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_recommendations(config: &ClientConfig, breed: &str) -> Result<Vec<Recommendation>, String> {
    let url = join(&config.recommend_url, &recommend_endpoint(breed));
    let body: Value = request(Verb::Get, &url, None, None).await.map_err(|e| e.to_string())?;
    Ok(recommendations_from(body))
}

// ---------------------------------------------------------------------------
// content
// ---------------------------------------------------------------------------

/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_random_articles(config: &ClientConfig, token: &str) -> Result<Vec<Article>, String> {
    let url = join(&config.server_url, RANDOM_ARTICLES);
    let list: DataList<Article> = request(Verb::Get, &url, Some(token), None).await.map_err(|e| e.to_string())?;
    Ok(list.data)
}

/// # Errors
///
/// Returns an error string if the request fails or the article is malformed.
pub async fn fetch_article(config: &ClientConfig, token: &str, id: &str) -> Result<Article, String> {
    let url = join(&config.server_url, &article_endpoint(id));
    let body: Value = request(Verb::Get, &url, Some(token), None).await.map_err(|e| e.to_string())?;
    serde_json::from_value(unwrap_data(body)).map_err(|e| e.to_string())
}

/// First page of upcoming events.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_events(config: &ClientConfig) -> Result<Vec<Event>, String> {
    let url = join(&config.server_url, EVENTS);
    let list: DataList<Event> = request(Verb::Get, &url, None, None).await.map_err(|e| e.to_string())?;
    Ok(list.data)
}

/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_products(config: &ClientConfig, token: &str) -> Result<Vec<Product>, String> {
    let url = join(&config.server_url, PRODUCTS);
    let list: ProductList = request(Verb::Get, &url, Some(token), None).await.map_err(|e| e.to_string())?;
    Ok(list.products)
}

/// # Errors
///
/// Returns an error string if the request fails or the product is malformed.
pub async fn fetch_product(config: &ClientConfig, token: &str, id: &str) -> Result<Product, String> {
    let url = join(&config.server_url, &product_endpoint(id));
    let body: Value = request(Verb::Get, &url, Some(token), None).await.map_err(|e| e.to_string())?;
    let body = match body {
        Value::Object(mut map) if map.contains_key("product") => map.remove("product").unwrap_or(Value::Null),
        other => unwrap_data(other),
    };
    serde_json::from_value(body).map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// predictors
// ---------------------------------------------------------------------------

/// # Errors
///
/// Returns an error string if the predictor rejects the pair.
pub async fn predict_pair(config: &ClientConfig, pair: &Value) -> Result<PairPrediction, String> {
    let url = join(&config.pair_url, "/predict");
    request(Verb::Post, &url, None, Some(pair)).await.map_err(|e| e.to_string())
}

/// # Errors
///
/// Returns an error string if the predictor call fails.
pub async fn predict_disease(config: &ClientConfig, symptoms: &[String]) -> Result<DiseasePrediction, String> {
    let url = join(&config.disease_url, "/predict");
    let body = serde_json::json!({ "symptoms": symptoms });
    request(Verb::Post, &url, None, Some(&body)).await.map_err(|e| e.to_string())
}
