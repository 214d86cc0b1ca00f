//! Route guards as pure projections of a [`SessionSnapshot`].
//!
//! Three guard kinds exist:
//! - [`Guard::RequireAuth`]: children only once identity resolved to
//!   authenticated, otherwise `/login`.
//! - [`Guard::PublicOnly`]: children only for signed-out visitors; signed-in
//!   subjects are sent to their role landing page (or `/loading` when the
//!   role is not known).
//! - [`Guard::RequireRole`]: children only when the cached role matches,
//!   otherwise `/`. Never `/login`: the subject is signed in, just in the
//!   wrong area.
//!
//! Every guard is [`Verdict::Pending`] while identity is unresolved, so no
//! guard can flash protected content or redirect prematurely.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::identity::IdentityState;
use crate::record::Role;
use crate::routes;
use crate::store::SessionSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Guard {
    RequireAuth,
    PublicOnly,
    RequireRole(Role),
}

/// Outcome of evaluating one guard or a chain of guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Render the neutral pending view.
    Pending,
    /// Render the guarded children.
    Render,
    /// Navigate away (replacing history) to the given path.
    Redirect(&'static str),
}

/// Evaluate a single guard against `snapshot`.
#[must_use]
pub fn evaluate(guard: Guard, snapshot: &SessionSnapshot) -> Verdict {
    match (&snapshot.identity, guard) {
        (IdentityState::Unknown, _) => Verdict::Pending,

        (IdentityState::Authenticated(_), Guard::RequireAuth) => Verdict::Render,
        (IdentityState::Unauthenticated, Guard::RequireAuth) => Verdict::Redirect(routes::LOGIN),

        (IdentityState::Authenticated(_), Guard::PublicOnly) => {
            Verdict::Redirect(routes::landing_path(snapshot.role()))
        }
        (IdentityState::Unauthenticated, Guard::PublicOnly) => Verdict::Render,

        (_, Guard::RequireRole(required)) => {
            if required.is_known() && snapshot.role() == required {
                Verdict::Render
            } else {
                Verdict::Redirect(routes::ROOT)
            }
        }
    }
}

/// Evaluate guards outermost-first; the first non-`Render` verdict wins.
#[must_use]
pub fn evaluate_chain(guards: &[Guard], snapshot: &SessionSnapshot) -> Verdict {
    guards
        .iter()
        .map(|guard| evaluate(*guard, snapshot))
        .find(|verdict| *verdict != Verdict::Render)
        .unwrap_or(Verdict::Render)
}
