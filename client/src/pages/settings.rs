//! Farmer profile settings.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use gate::SessionRecord;
use leptos::prelude::*;

use crate::net::types::Profile;
use crate::state::session::use_session;

/// Profile built from the cached session record, shown until the backend answers.
pub fn profile_from_record(record: &SessionRecord) -> Profile {
    Profile {
        full_name: record.full_name.clone(),
        email: record.email.clone(),
        phone: record.phone.clone().unwrap_or_default(),
        address: record.address.clone().unwrap_or_default(),
        user_type: record.user_type.is_known().then(|| record.user_type.as_str().to_owned()),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let fetched = RwSignal::new(None::<Profile>);

    #[cfg(feature = "hydrate")]
    {
        let services = expect_context::<crate::state::services::Services>();
        leptos::task::spawn_local(async move {
            let Some(token) = services.bearer().await else {
                return;
            };
            if let Some(profile) = crate::net::api::fetch_profile(&services.config, &token).await {
                fetched.set(Some(profile));
            }
        });
    }

    let profile = move || {
        fetched.get().unwrap_or_else(|| session.with(|s| s.record.as_ref().map(profile_from_record).unwrap_or_default()))
    };
    let row = move |label: &'static str, get: fn(&Profile) -> String| {
        view! {
            <div class="settings__row">
                <span class="settings__label">{label}</span>
                <span class="settings__value">{move || get(&profile())}</span>
            </div>
        }
    };

    view! {
        <div class="settings">
            <h1>"Settings"</h1>
            <section class="settings__card">
                <h2>"Profile"</h2>
                {row("Full name", |p| p.full_name.clone())}
                {row("Email", |p| p.email.clone())}
                {row("Phone", |p| p.phone.clone())}
                {row("Address", |p| p.address.clone())}
                {row("Account type", |p| p.user_type.clone().unwrap_or_default())}
            </section>
        </div>
    }
}
