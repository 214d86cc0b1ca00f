//! Authenticated root page pointing the visitor at their area.

use gate::Page;
use gate::routes::landing_path;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::gated::Gated;
use crate::state::session::use_session;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Gated page=Page::Landing>
            <Welcome/>
        </Gated>
    }
}

#[component]
fn Welcome() -> impl IntoView {
    let session = use_session();
    let name = move || {
        session.with(|s| s.record.as_ref().map_or_else(|| "there".to_owned(), |r| r.display_name().to_owned()))
    };
    let area = move || landing_path(session.with(gate::SessionSnapshot::role)).to_owned();

    view! {
        <div class="landing">
            <h1>"Welcome to Gaupal, " {name}</h1>
            <p>"Manage your herd, find breeding partners, and trade farm produce."</p>
            <A href=area attr:class="landing__cta">"Go to your dashboard"</A>
        </div>
    }
}
