//! Networking modules for the backend REST API and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles backend and predictor calls, `identity_toolkit` talks to the
//! hosted identity provider, and `types` defines the shared wire schema.

pub mod api;
pub mod identity_toolkit;
pub mod types;
