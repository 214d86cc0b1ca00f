//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and redirect plumbing from page
//! and component logic.

pub mod auth;
pub mod session_cache;
pub mod storage;
