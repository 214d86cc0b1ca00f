//! Farmer landing page: random articles and upcoming events.

use leptos::prelude::*;

use crate::components::cards::{ArticleCard, EventCard, RemoteList};
use crate::net::types::{Article, Event};
use crate::state::remote::Remote;

#[component]
pub fn FarmerDashboard() -> impl IntoView {
    let articles = RwSignal::new(Remote::<Vec<Article>>::Loading);
    let events = RwSignal::new(Remote::<Vec<Event>>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let services = expect_context::<crate::state::services::Services>();
        leptos::task::spawn_local(async move {
            let loaded = async {
                let token = services.require_bearer().await?;
                crate::net::api::fetch_random_articles(&services.config, &token).await
            }
            .await;
            articles.set(Remote::from_result(loaded));
            events.set(Remote::from_result(crate::net::api::fetch_events(&services.config).await));
        });
    }

    view! {
        <div class="dashboard">
            <section class="dashboard__section">
                <h2>"Articles"</h2>
                <div class="card-row">
                    <RemoteList
                        items=articles
                        render=|article| view! { <ArticleCard article=article base="/farmer"/> }
                        empty="No articles available"
                        loading="Loading articles..."
                    />
                </div>
            </section>
            <section class="dashboard__section">
                <h2>"Upcoming events"</h2>
                <div class="card-row">
                    <RemoteList
                        items=events
                        render=|event| view! { <EventCard event=event/> }
                        empty="No events available"
                        loading="Loading events..."
                    />
                </div>
            </section>
        </div>
    }
}
