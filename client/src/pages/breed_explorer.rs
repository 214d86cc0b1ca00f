//! Buyer breed explorer: pick an indigenous breed and see which breeds it
//! pairs best with, by milk yield and compatibility score.

#[cfg(test)]
#[path = "breed_explorer_test.rs"]
mod breed_explorer_test;

use leptos::prelude::*;

use crate::net::types::Recommendation;
use crate::pages::cattle::{BREED_OPTIONS, RecommendationTable, milk_yield_label};
use crate::state::remote::Remote;

/// Highest-scoring partner breed, if any.
pub fn strongest_partner(list: &[Recommendation]) -> Option<&Recommendation> {
    list.iter().max_by(|a, b| a.score.total_cmp(&b.score))
}

#[component]
pub fn BreedExplorer() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::state::services::Services>();
    let breed = RwSignal::new(String::new());
    let recommendations = RwSignal::new(Remote::<Vec<Recommendation>>::Loading);

    let on_select = move |ev: leptos::ev::Event| {
        let chosen = event_target_value(&ev);
        breed.set(chosen.clone());
        if chosen.is_empty() {
            return;
        }
        recommendations.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            leptos::task::spawn_local(async move {
                let loaded = crate::net::api::fetch_recommendations(&services.config, &chosen).await;
                if let Err(e) = &loaded {
                    log::warn!("recommendations for {chosen} failed: {e}");
                }
                if breed.get_untracked() == chosen {
                    recommendations.set(Remote::from_result(
                        loaded.map_err(|_| "Failed to fetch breeding recommendations".to_owned()),
                    ));
                }
            });
        }
    };

    let highlight = move || {
        recommendations.with(|state| {
            state.ready().and_then(|list| strongest_partner(list)).map(|best| {
                view! {
                    <p class="breed-explorer__best">
                        "Best partner: " <strong>{best.breed.clone()}</strong>
                        " (" {milk_yield_label(best.milk_yield)} ")"
                    </p>
                }
            })
        })
    };

    view! {
        <div class="breed-explorer">
            <h1>"Explore Breeds"</h1>
            <label for="explore-breed">"Breed"</label>
            <select id="explore-breed" on:change=on_select>
                <option value="">"Select Breed"</option>
                {BREED_OPTIONS.iter().map(|name| view! { <option value=*name>{*name}</option> }).collect_view()}
            </select>
            <Show when=move || !breed.get().is_empty()>
                {highlight}
                <RecommendationTable recommendations=recommendations/>
            </Show>
        </div>
    }
}
