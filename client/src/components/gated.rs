//! Route gate: renders children only when the page's guard chain allows it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components wrap their content in [`Gated`]. The verdict is a memo
//! over the session snapshot in context, so every gate re-evaluates from the
//! same state at the same time and none of them subscribes to identity on
//! its own.

use gate::guard::evaluate_chain;
use gate::{Page, RouteTable, Verdict};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::install_guard_redirect;

/// Neutral view shown while a guard is pending or about to redirect.
#[component]
pub fn PendingView() -> impl IntoView {
    view! {
        <div class="pending" role="status" aria-busy="true">
            <div class="pending__spinner"></div>
        </div>
    }
}

/// Evaluate the guards declared for `page` and render `children` on success.
#[component]
pub fn Gated(page: Page, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let guards = RouteTable::standard().guards_for(page);
    let verdict = Memo::new(move |_| evaluate_chain(&guards, &session.get()));

    install_guard_redirect(verdict, use_navigate());

    view! {
        <Show when=move || verdict.get() == Verdict::Render fallback=|| view! { <PendingView/> }>
            {children()}
        </Show>
    }
}
