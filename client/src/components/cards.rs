//! Cards shared by the dashboards and listing pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Article, Event, Product};
use crate::state::remote::Remote;

const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Article teaser linking to `{base}/article/{id}`.
#[component]
pub fn ArticleCard(article: Article, base: &'static str) -> impl IntoView {
    let href = format!("{base}/article/{}", article.id);
    let image = article.image_url().unwrap_or(PLACEHOLDER_IMAGE).to_owned();
    let summary = article.summary();
    view! {
        <A href=href attr:class="article-card">
            <img class="article-card__image" src=image alt=article.title.clone()/>
            <div class="article-card__body">
                <h3>{article.title}</h3>
                <p>{summary}</p>
            </div>
        </A>
    }
}

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let image = event.images.first().map_or(PLACEHOLDER_IMAGE, |i| i.url.as_str()).to_owned();
    let when = event.when().to_owned();
    view! {
        <div class="event-card">
            <img class="event-card__image" src=image alt=event.title.clone()/>
            <div class="event-card__body">
                <h3>{event.title}</h3>
                <p>{event.description}</p>
                <span class="event-card__when">{when}</span>
                <span class="event-card__where">{event.location}</span>
            </div>
        </div>
    }
}

/// Product tile linking to `{base}/product/{id}`.
#[component]
pub fn ProductCard(product: Product, base: &'static str) -> impl IntoView {
    let href = format!("{base}/product/{}", product.id);
    let image = product.cover_image().to_owned();
    let price = product.price_label();
    view! {
        <A href=href attr:class="product-card">
            <img class="product-card__image" src=image alt=product.name.clone()/>
            <div class="product-card__body">
                <h3>{product.name}</h3>
                <span class="product-card__price">{price}</span>
                <span class="product-card__category">{product.category}</span>
            </div>
        </A>
    }
}

/// Loading, error, empty, or the rendered list.
#[component]
pub fn RemoteList<T, F, V>(
    #[prop(into)] items: Signal<Remote<Vec<T>>>,
    render: F,
    #[prop(into)] empty: String,
    #[prop(into)] loading: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let render = render.clone();
        items.with(|state| match state {
            Remote::Loading => view! { <p class="list-status">{loading.clone()}</p> }.into_any(),
            Remote::Failed(message) => {
                view! { <p class="list-status list-status--error">{message.clone()}</p> }.into_any()
            }
            Remote::Ready(list) if list.is_empty() => {
                view! { <p class="list-status">{empty.clone()}</p> }.into_any()
            }
            Remote::Ready(list) => list.iter().cloned().map(render).collect_view().into_any(),
        })
    }
}
