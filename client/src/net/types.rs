//! REST DTOs for the Gaupal backend and the prediction services.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: ids arrive as `_id` or `id`, numbers
//! arrive as strings, optional lists are missing. Every type here decodes
//! leniently so one odd record degrades to a blank cell rather than a failed
//! page load.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use gate::{Role, SessionRecord};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// `POST /gaupal/auth/login` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub id_token: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: SessionRecord,
}

/// `POST /gaupal/auth/signup` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub user_type: Role,
}

impl SignupRequest {
    /// Session record cached after a successful signup.
    #[must_use]
    pub fn session_record(&self, uid: &str) -> SessionRecord {
        SessionRecord {
            uid: uid.to_owned(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            phone: Some(self.phone.clone()),
            address: Some(self.address.clone()),
            user_type: self.user_type,
            is_verified: false,
            extra: Map::new(),
        }
    }
}

/// Error body: `{ "message": "..." }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /gaupal/auth/profile`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "text")]
    pub phone: String,
    #[serde(default, deserialize_with = "text")]
    pub address: String,
    #[serde(default)]
    pub user_type: Option<String>,
}

/// A registered animal.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cattle {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default, deserialize_with = "text")]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub health_status: String,
    #[serde(default, deserialize_with = "text")]
    pub disease: String,
    #[serde(default, deserialize_with = "text")]
    pub ear_tag: String,
    #[serde(default, deserialize_with = "text")]
    pub color: String,
    #[serde(default, deserialize_with = "text")]
    pub paddock_location: String,
    #[serde(default, deserialize_with = "text")]
    pub special_notes: String,
}

impl Cattle {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.health_status.eq_ignore_ascii_case("healthy")
    }
}

/// Disease choice meaning "use the free-text field instead".
pub const OTHER_DISEASE: &str = "Other";

/// `POST /gaupal/cattle/:uid` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCattle {
    pub name: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub date_of_birth: String,
    pub weight: String,
    pub height: String,
    pub color: String,
    pub health_status: String,
    pub last_veterinary_checkup: String,
    pub vaccinations: Vec<Vaccination>,
    pub is_breeding_stock: bool,
    pub number_of_calves: u32,
    pub ear_tag: String,
    pub paddock_location: String,
    pub disease: String,
    #[serde(skip)]
    pub custom_disease: String,
    pub special_notes: String,
}

impl Default for NewCattle {
    fn default() -> Self {
        Self {
            name: String::new(),
            breed: String::new(),
            age: String::new(),
            gender: String::new(),
            date_of_birth: String::new(),
            weight: String::new(),
            height: String::new(),
            color: String::new(),
            health_status: "healthy".to_owned(),
            last_veterinary_checkup: String::new(),
            vaccinations: Vec::new(),
            is_breeding_stock: false,
            number_of_calves: 0,
            ear_tag: String::new(),
            paddock_location: String::new(),
            disease: "None".to_owned(),
            custom_disease: String::new(),
            special_notes: String::new(),
        }
    }
}

impl NewCattle {
    /// Copy ready to send: `Other` is replaced by the free-text disease.
    #[must_use]
    pub fn resolved(&self) -> Self {
        let mut out = self.clone();
        if out.disease == OTHER_DISEASE {
            out.disease = out.custom_disease.trim().to_owned();
        }
        out
    }
}

/// `POST /gaupal/cattle/item/:id/vaccinations` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub next_due_date: String,
}

/// `GET /gaupal/cattle/:uid/metrics`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[serde(default)]
    pub total_cattle: u32,
    #[serde(default)]
    pub cattle_health_summary: HealthSummary,
    #[serde(default)]
    pub upcoming_vaccinations: Vec<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthSummary {
    #[serde(default)]
    pub healthy: u32,
}

/// One row of `GET /recommend?breed=`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Breed")]
    pub breed: String,
    #[serde(rename = "Milk_Yield", default)]
    pub milk_yield: f64,
    #[serde(rename = "Score", default)]
    pub score: f64,
}

/// Badge tier for a compatibility score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score >= 9.0 {
            Self::High
        } else if score >= 8.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "score score--high",
            Self::Medium => "score score--medium",
            Self::Low => "score score--low",
        }
    }
}

/// Decode a recommendation body; anything but an array is an empty list.
#[must_use]
pub fn recommendations_from(body: Value) -> Vec<Recommendation> {
    match body {
        Value::Array(items) => items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect(),
        _ => Vec::new(),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Article {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub introduction: Option<Value>,
    #[serde(default)]
    pub headings: Vec<ArticleSection>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ArticleSection {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<Image>,
}

impl Article {
    /// Description, else the first 100 characters of the content.
    #[must_use]
    pub fn summary(&self) -> String {
        match (&self.description, &self.content) {
            (Some(description), _) if !description.is_empty() => description.clone(),
            (_, Some(content)) => content.chars().take(100).collect(),
            _ => String::new(),
        }
    }

    /// Introduction paragraph, when the article has one.
    #[must_use]
    pub fn intro_text(&self) -> Option<&str> {
        self.introduction.as_ref()?.get("content")?.as_str()
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.introduction.as_ref()?.get("image")?.get("url")?.as_str().filter(|url| !url.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Event {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub location: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Event {
    #[must_use]
    pub fn when(&self) -> &str {
        self.time.as_deref().filter(|t| !t.is_empty()).unwrap_or(&self.date)
    }
}

/// `{ "data": [...] }` envelope used by articles and events.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DataList<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "number")]
    pub price: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "text")]
    pub location: String,
}

impl Product {
    #[must_use]
    pub fn cover_image(&self) -> &str {
        self.images.first().map_or("/default-product-image.png", String::as_str)
    }

    #[must_use]
    pub fn price_label(&self) -> String {
        if self.unit.is_empty() {
            format!("₹{}", self.price)
        } else {
            format!("₹{}/{}", self.price, self.unit)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Breeding-pair predictor result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PairPrediction {
    pub prediction: String,
    #[serde(default)]
    pub probability: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DiseasePrediction {
    pub prediction: String,
}

/// Unwrap `{ "data": x }` to `x`; other bodies pass through.
#[must_use]
pub fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

/// Accept strings, numbers, booleans, `null`, or nested objects as text.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) => match map.get("address").and_then(Value::as_str) {
            Some(address) => address.to_owned(),
            None => Value::Object(map).to_string(),
        },
        other @ Value::Array(_) => other.to_string(),
    })
}

fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}
