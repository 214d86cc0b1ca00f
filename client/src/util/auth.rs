//! Shared guard redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route applies identical redirect behavior: a `Redirect`
//! verdict navigates away with history replacement, so the back button never
//! returns to a page the visitor was bounced from.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::routes::{self, landing_path};
use gate::{IdentityState, SessionSnapshot, Verdict};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Path a verdict navigates to, if any.
pub fn redirect_target(verdict: Verdict) -> Option<&'static str> {
    match verdict {
        Verdict::Redirect(to) => Some(to),
        Verdict::Pending | Verdict::Render => None,
    }
}

/// Where the neutral loading page forwards once the session settles.
///
/// Stays put while identity is unresolved or the role is still unknown.
pub fn forward_target(snapshot: &SessionSnapshot) -> Option<&'static str> {
    match &snapshot.identity {
        IdentityState::Unknown => None,
        IdentityState::Unauthenticated => Some(routes::LOGIN),
        IdentityState::Authenticated(_) => {
            let role = snapshot.role();
            role.is_known().then(|| landing_path(role))
        }
    }
}

/// Signed in, but the cached record names no usable role.
///
/// The loading page cannot forward from here on its own; only a fresh login
/// (which rewrites the record) or a logout gets the visitor out.
pub fn role_unresolved(snapshot: &SessionSnapshot) -> bool {
    matches!(snapshot.identity, IdentityState::Authenticated(_)) && !snapshot.role().is_known()
}

pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `verdict` turns into a redirect.
pub fn install_guard_redirect<F>(verdict: Memo<Verdict>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(to) = redirect_target(verdict.get()) {
            log::debug!("guard redirect to {to}");
            navigate(to, replace_history());
        }
    });
}
