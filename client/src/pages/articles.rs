//! Article listing and detail, shared by the farmer and buyer areas.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::cards::{ArticleCard, RemoteList};
use crate::net::types::Article;
use crate::state::remote::Remote;

/// Article teasers; cards link under `base`.
#[component]
pub fn ArticleList(base: &'static str) -> impl IntoView {
    let articles = RwSignal::new(Remote::<Vec<Article>>::Loading);

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
        });
    }

    view! {
        <div class="articles">
            <h1>"Articles"</h1>
            <div class="card-grid">
                <RemoteList
                    items=articles
                    render=move |article| view! { <ArticleCard article=article base=base/> }
                    empty="No articles available"
                    loading="Loading articles..."
                />
            </div>
        </div>
    }
}

/// Full article for the `articleId` path parameter.
#[component]
pub fn ArticleDetail(base: &'static str) -> impl IntoView {
    let params = use_params_map();
    let article_id = Memo::new(move |_| params.with(|p| p.get("articleId").unwrap_or_default()));
    let article = RwSignal::new(Remote::<Article>::Loading);

    Effect::new(move || {
        let id = article_id.get();
        article.set(Remote::Loading);
        #[cfg(feature = "hydrate")]
        {
            let services = expect_context::<crate::state::services::Services>();
            leptos::task::spawn_local(async move {
                let loaded = async {
                    let token = services.require_bearer().await?;
                    crate::net::api::fetch_article(&services.config, &token, &id).await
                }
                .await;
                if article_id.get_untracked() == id {
                    article.set(Remote::from_result(loaded));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let back = format!("{base}/article");
    let body = move || {
        article.with(|state| match state {
            Remote::Loading => view! { <p class="list-status">"Loading article..."</p> }.into_any(),
            Remote::Failed(message) => view! { <p class="list-status list-status--error">{message.clone()}</p> }.into_any(),
            Remote::Ready(article) => render_article(article),
        })
    };

    view! {
        <div class="article-detail">
            <A href=back attr:class="article-detail__back">"Back to articles"</A>
            {body}
        </div>
    }
}

fn render_article(article: &Article) -> AnyView {
    let image = article.image_url().map(|url| view! { <img class="article-detail__hero" src=url.to_owned() alt=article.title.clone()/> });
    let intro = article
        .intro_text()
        .or(article.content.as_deref())
        .map(|text| view! { <p class="article-detail__intro">{text.to_owned()}</p> });
    let sections = article
        .headings
        .iter()
        .map(|section| {
            let image = section
                .image
                .as_ref()
                .filter(|i| !i.url.is_empty())
                .map(|i| view! { <img src=i.url.clone() alt=section.heading.clone()/> });
            view! {
                <section class="article-detail__section">
                    <h2>{section.heading.clone()}</h2>
                    {image}
                    <p>{section.content.clone()}</p>
                </section>
            }
        })
        .collect_view();
    view! {
        <article>
            <h1>{article.title.clone()}</h1>
            {image}
            {intro}
            {sections}
        </article>
    }
    .into_any()
}
