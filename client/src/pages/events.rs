//! Farmer events listing.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use leptos::prelude::*;

use crate::components::cards::{EventCard, RemoteList};
use crate::net::types::Event;
use crate::state::remote::Remote;

/// Earliest date first; events without a date go last.
pub fn by_date(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by(|a, b| match (a.date.is_empty(), b.date.is_empty()) {
        (false, true) => std::cmp::Ordering::Less,
        (true, false) => std::cmp::Ordering::Greater,
        _ => a.date.cmp(&b.date),
    });
    events
}

#[component]
pub fn EventList() -> impl IntoView {
    let events = RwSignal::new(Remote::<Vec<Event>>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let services = expect_context::<crate::state::services::Services>();
        leptos::task::spawn_local(async move {
            let loaded = crate::net::api::fetch_events(&services.config).await;
            if let Err(e) = &loaded {
                log::warn!("events failed: {e}");
            }
            events.set(Remote::from_result(loaded.map(by_date)));
        });
    }

    view! {
        <div class="events">
            <h1>"Upcoming events"</h1>
            <div class="card-grid">
                <RemoteList
                    items=events
                    render=|event| view! { <EventCard event=event/> }
                    empty="No events available"
                    loading="Loading events..."
                />
            </div>
        </div>
    }
}
