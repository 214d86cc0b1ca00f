//! Buyer landing page: featured products and random articles.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cards::{ArticleCard, ProductCard, RemoteList};
use crate::net::types::{Article, Product};
use crate::state::remote::Remote;

const FEATURED_PRODUCTS: usize = 6;

#[component]
pub fn BuyerDashboard() -> impl IntoView {
    let products = RwSignal::new(Remote::<Vec<Product>>::Loading);
    let articles = RwSignal::new(Remote::<Vec<Article>>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let services = expect_context::<crate::state::services::Services>();
        leptos::task::spawn_local(async move {
            let token = match services.require_bearer().await {
                Ok(token) => token,
                Err(message) => {
                    products.set(Remote::Failed(message.clone()));
                    articles.set(Remote::Failed(message));
                    return;
                }
            };
            let featured = crate::net::api::fetch_products(&services.config, &token)
                .await
                .map(|mut list| {
                    list.truncate(FEATURED_PRODUCTS);
                    list
                });
            products.set(Remote::from_result(featured));
            articles.set(Remote::from_result(crate::net::api::fetch_random_articles(&services.config, &token).await));
        });
    }

    view! {
        <div class="dashboard">
            <section class="dashboard__section">
                <div class="dashboard__heading">
                    <h2>"Fresh from the farm"</h2>
                    <A href="/buyer/item-list">"View all"</A>
                </div>
                <div class="card-grid">
                    <RemoteList
                        items=products
                        render=|product| view! { <ProductCard product=product base="/buyer"/> }
                        empty="No products available"
                        loading="Loading products..."
                    />
                </div>
            </section>
            <section class="dashboard__section">
                <h2>"Articles"</h2>
                <div class="card-row">
                    <RemoteList
                        items=articles
                        render=|article| view! { <ArticleCard article=article base="/buyer"/> }
                        empty="No articles available"
                        loading="Loading articles..."
                    />
                </div>
            </section>
        </div>
    }
}
