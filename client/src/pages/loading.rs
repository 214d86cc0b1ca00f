//! Neutral holding page for signed-in visitors whose role is not known yet.
//!
//! Forwards on its own once the session settles. When the subject is signed
//! in but the record carries no usable role, the page offers a way back to
//! the login form instead of spinning forever.

use gate::SessionSnapshot;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::gated::PendingView;
use crate::state::services::Services;
use crate::state::session::use_session;
use crate::util::auth::{forward_target, replace_history, role_unresolved};

#[component]
pub fn LoadingPage() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = use_session();
    let navigate = use_navigate();
    let target = Memo::new(move |_| session.with(|s: &SessionSnapshot| forward_target(s)));
    let unresolved = Memo::new(move |_| session.with(role_unresolved));

    Effect::new({
        let navigate = navigate.clone();
        move || {
            if let Some(to) = target.get() {
                log::debug!("loading page forwarding to {to}");
                navigate(to, replace_history());
            }
        }
    });

    let on_back = move |_: leptos::ev::MouseEvent| {
        services.logout();
        navigate(gate::routes::LOGIN, replace_history());
    };

    view! {
        <div class="loading-page">
            <PendingView/>
            <Show when=move || unresolved.get()>
                <p class="loading-page__hint">"We could not determine your account type."</p>
            </Show>
            <button class="loading-page__back" on:click=on_back>"Back to login"</button>
        </div>
    }
}
