//! Cached session record and role discriminator.
//!
//! DESIGN
//! ======
//! The record mirrors the backend's user object (camelCase JSON) and keeps
//! unknown fields in `extra` so a write-after-read never drops data. Every
//! modelled field is read leniently: an unexpected `userType` shape degrades
//! to [`Role::Unknown`], and a mistyped profile field (a numeric `phone`, a
//! `null` name) is coerced or blanked. One odd field never costs the record,
//! and with it the role.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::identity::Subject;

/// Client-side role used only for route steering.
///
/// Advisory: it is read from an unverified local cache, so every backend
/// endpoint must still authorize requests on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Buyer,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Parse a raw `userType` value. Matching is exact, like the backend emits it.
    #[must_use]
    pub fn from_user_type(raw: &str) -> Self {
        match raw {
            "farmer" => Self::Farmer,
            "buyer" => Self::Buyer,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Buyer => "buyer",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the role names an actual area of the app.
    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// Locally cached, unverified copy of the signed-in subject's profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Identity-provider subject id the record was written for.
    #[serde(default, deserialize_with = "lenient_text")]
    pub uid: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub address: Option<String>,
    /// Role discriminator; see [`Role`].
    #[serde(default, deserialize_with = "lenient_role")]
    pub user_type: Role,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_verified: bool,
    /// Raw profile fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionRecord {
    /// Whether this record may be trusted for `subject`.
    ///
    /// Records without a `uid` predate subject tagging and are accepted.
    #[must_use]
    pub fn belongs_to(&self, subject: &Subject) -> bool {
        self.uid.is_empty() || self.uid == subject.uid
    }

    /// Name shown in navigation chrome.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if !self.full_name.trim().is_empty() {
            &self.full_name
        } else if !self.email.is_empty() {
            &self.email
        } else {
            "Guest"
        }
    }
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map_or(Role::Unknown, Role::from_user_type))
}

/// Strings pass through, numbers and booleans are rendered, anything else is absent.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::String(text) => text == "true",
        _ => false,
    })
}
