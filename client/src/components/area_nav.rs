//! Sidebar for the farmer and buyer areas.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links come from the route table's labelled children of the area, so the
//! menu cannot drift from the routes. The header shows the profile name from
//! the backend, falling back to the cached session record.

use gate::{Page, RouteTable};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::services::Services;
use crate::state::session::use_session;
use crate::util::auth::replace_history;

#[component]
pub fn AreaNav(area: Page) -> impl IntoView {
    let services = expect_context::<Services>();
    let session = use_session();
    let navigate = use_navigate();
    let profile_name = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let Some(token) = services.bearer().await else {
                return;
            };
            if let Some(profile) = crate::net::api::fetch_profile(&services.config, &token).await {
                if !profile.full_name.trim().is_empty() {
                    profile_name.set(Some(profile.full_name));
                }
            }
        });
    }

    let display_name = move || {
        profile_name.get().unwrap_or_else(|| {
            session.with(|s| s.record.as_ref().map_or_else(|| "Guest".to_owned(), |r| r.display_name().to_owned()))
        })
    };

    let links = RouteTable::standard()
        .menu(area)
        .into_iter()
        .map(|(href, label)| {
            view! {
                <li class="area-nav__item">
                    <A href=href attr:class="area-nav__link">{label}</A>
                </li>
            }
        })
        .collect_view();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        services.logout();
        navigate(gate::routes::LOGIN, replace_history());
    };

    view! {
        <nav class="area-nav">
            <div class="area-nav__brand">"Gaupal"</div>
            <div class="area-nav__user">{display_name}</div>
            <ul class="area-nav__links">{links}</ul>
            <button class="area-nav__logout" on:click=on_logout>"Logout"</button>
        </nav>
    }
}
