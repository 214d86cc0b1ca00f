//! Session cache contract and the single parse/validate path for it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cache is a persisted key/value slot (`localStorage` in the browser)
//! holding the serialized [`SessionRecord`]. Writers are login, signup and
//! logout. Every reader goes through [`parse_record`], so malformed data is
//! handled in exactly one place.
//!
//! ERROR HANDLING
//! ==============
//! [`SessionCache::read`] never fails: bad entries are logged and reported
//! as absent. Stale or garbage data must degrade to an unknown role, never to
//! a crashed guard.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::record::{Role, SessionRecord};

/// Storage key the session record lives under.
pub const SESSION_KEY: &str = "user";

/// Error returned by [`parse_record`] and [`encode_record`].
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The stored text is not JSON.
    #[error("session entry is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The stored JSON is valid but not an object (e.g. `null`, a string).
    #[error("session entry is not a JSON object")]
    NotAnObject,
}

/// Parse a raw cache entry into a record.
///
/// # Errors
///
/// Returns [`CacheError::Malformed`] for invalid JSON and
/// [`CacheError::NotAnObject`] for non-object JSON.
pub fn parse_record(raw: &str) -> Result<SessionRecord, CacheError> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(CacheError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Extract the role from a raw cache entry; never fails.
///
/// Falls back to reading `userType` straight off the JSON object when the
/// rest of the record does not parse, so one bad field elsewhere does not
/// cost the role.
#[must_use]
pub fn parse_role(raw: Option<&str>) -> Role {
    let Some(raw) = raw else {
        return Role::Unknown;
    };
    match parse_record(raw) {
        Ok(record) => record.user_type,
        Err(_) => serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|v| v.get("userType").and_then(Value::as_str).map(Role::from_user_type))
            .unwrap_or(Role::Unknown),
    }
}

/// Serialize a record for storage.
///
/// # Errors
///
/// Returns [`CacheError::Malformed`] if serialization fails.
pub fn encode_record(record: &SessionRecord) -> Result<String, CacheError> {
    Ok(serde_json::to_string(record)?)
}

/// Persisted slot holding the serialized session record.
///
/// Implementors only move raw strings; parsing lives in the provided methods.
pub trait SessionCache: Send + Sync {
    fn read_raw(&self) -> Option<String>;
    fn write_raw(&self, raw: &str);
    fn clear(&self);

    /// Read and validate the cached record. Malformed entries read as `None`.
    fn read(&self) -> Option<SessionRecord> {
        let raw = self.read_raw()?;
        match parse_record(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring cached session: {e}");
                None
            }
        }
    }

    /// Role of the cached record, or [`Role::Unknown`].
    fn role(&self) -> Role {
        parse_role(self.read_raw().as_deref())
    }

    fn write(&self, record: &SessionRecord) {
        match encode_record(record) {
            Ok(raw) => self.write_raw(&raw),
            Err(e) => log::warn!("failed to encode session record: {e}"),
        }
    }
}

/// In-process cache used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slot: Mutex<Option<String>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-filled with arbitrary raw text, valid or not.
    #[must_use]
    pub fn with_raw(raw: &str) -> Self {
        Self { slot: Mutex::new(Some(raw.to_owned())) }
    }
}

impl SessionCache for MemoryCache {
    fn read_raw(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn write_raw(&self, raw: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
