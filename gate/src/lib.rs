//! Session and route-gating model for the Gaupal front-end.
//!
//! This crate owns everything the UI needs to decide *whether* a route may
//! render: the cached session record and its role discriminator, the
//! identity-provider contract, the single versioned session store that both
//! feed into, the guard projections, and the static route table.
//!
//! It is UI-framework agnostic so the Leptos client can consume it directly
//! and so the decision logic is testable without a browser.
//!
//! ARCHITECTURE
//! ============
//! Identity events and cache writes reconcile into one [`SessionStore`].
//! Guards never subscribe to the identity provider themselves; they are pure
//! functions of a [`SessionSnapshot`], which removes the per-guard fan-out
//! and the divergent resolution timing that comes with it.

pub mod cache;
pub mod guard;
pub mod identity;
pub mod listeners;
pub mod record;
pub mod routes;
pub mod store;

pub use cache::{MemoryCache, SessionCache};
pub use guard::{Guard, Verdict};
pub use identity::{Credential, IdentityError, IdentityProvider, IdentityState, LocalIdentity, Subject};
pub use listeners::{Listeners, Subscription};
pub use record::{Role, SessionRecord};
pub use routes::{Navigation, Page, RouteMatch, RouteTable};
pub use store::{SessionSnapshot, SessionStore};
