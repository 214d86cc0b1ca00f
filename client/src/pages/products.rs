//! Product listing and detail, mounted in both areas.
//!
//! `base` is the area prefix (`/farmer` or `/buyer`); the farmer area lists
//! the same marketplace catalogue the buyer sees.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::cards::{ProductCard, RemoteList};
use crate::net::types::Product;
use crate::state::remote::Remote;

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

/// Listing path inside an area: buyers browse `item-list`, farmers `products`.
pub fn listing_path(base: &str) -> String {
    if base == "/farmer" { format!("{base}/products") } else { format!("{base}/item-list") }
}

/// Products whose name or category contains `query`, ignoring case.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let query = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query) || p.category.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[component]
pub fn ItemList(base: &'static str) -> impl IntoView {
    let products = RwSignal::new(Remote::<Vec<Product>>::Loading);
    let query = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let services = expect_context::<crate::state::services::Services>();
        leptos::task::spawn_local(async move {
            let loaded = async {
                let token = services.require_bearer().await?;
                crate::net::api::fetch_products(&services.config, &token).await
            }
            .await;
            products.set(Remote::from_result(loaded));
        });
    }

    let visible = Signal::derive(move || match products.get() {
        Remote::Ready(list) => Remote::Ready(filter_products(&list, &query.get())),
        other => other,
    });

    view! {
        <div class="item-list">
            <h1>"Products"</h1>
            <input
                class="item-list__search"
                type="search"
                placeholder="Search products"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div class="card-grid">
                <RemoteList
                    items=visible
                    render=move |product| view! { <ProductCard product=product base=base/> }
                    empty="No products found"
                    loading="Loading products..."
                />
            </div>
        </div>
    }
}

#[component]
pub fn ProductDetail(base: &'static str) -> impl IntoView {
    let params = use_params_map();
    let product_id = Memo::new(move |_| params.with(|p| p.get("productId").unwrap_or_default()));
    let product = RwSignal::new(Remote::<Product>::Loading);

    Effect::new(move || {
        let id = product_id.get();
        product.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let services = expect_context::<crate::state::services::Services>();
            leptos::task::spawn_local(async move {
                let loaded = async {
                    let token = services.require_bearer().await?;
                    crate::net::api::fetch_product(&services.config, &token, &id).await
                }
                .await;
                if product_id.get_untracked() == id {
                    product.set(Remote::from_result(loaded));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let body = move || {
        product.with(|state| match state {
            Remote::Loading => view! { <p class="list-status">"Loading product..."</p> }.into_any(),
            Remote::Failed(message) => view! { <p class="list-status list-status--error">{message.clone()}</p> }.into_any(),
            Remote::Ready(p) => {
                let gallery = p
                    .images
                    .iter()
                    .map(|src| view! { <img class="product-detail__image" src=src.clone() alt=p.name.clone()/> })
                    .collect_view();
                view! {
                    <div class="product-detail__body">
                        <img class="product-detail__cover" src=p.cover_image().to_owned() alt=p.name.clone()/>
                        <h1>{p.name.clone()}</h1>
                        <span class="product-detail__price">{p.price_label()}</span>
                        <span class="product-detail__category">{p.category.clone()}</span>
                        <p>{p.description.clone()}</p>
                        <p class="product-detail__location">{p.location.clone()}</p>
                        <div class="product-detail__gallery">{gallery}</div>
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <div class="product-detail">
            <A href=listing_path(base) attr:class="product-detail__back">"Back to products"</A>
            {body}
        </div>
    }
}
