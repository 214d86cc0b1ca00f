//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` builds the [`Services`] once, bridges the session store into a
//! signal, and mounts the route tree. Guards are not attached to routes
//! here: each route's page wraps itself in `Gated`, which reads the guard
//! chain for its page from `gate::RouteTable`. Area children inherit the
//! area's gate through the layout's outlet.
//!
//! The tree below mirrors `RouteTable::standard()` path for path; the
//! server's route tests fail when the two drift apart.

use gate::routes::{BUYER_LANDING, FARMER_LANDING};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::area::{BuyerArea, FarmerArea};
use crate::pages::articles::{ArticleDetail, ArticleList};
use crate::pages::breed::BreedCompatibility;
use crate::pages::breed_explorer::BreedExplorer;
use crate::pages::buyer_dashboard::BuyerDashboard;
use crate::pages::cattle::CattleManagement;
use crate::pages::disease::DiseaseQna;
use crate::pages::events::EventList;
use crate::pages::farmer_dashboard::FarmerDashboard;
use crate::pages::landing::LandingPage;
use crate::pages::loading::LoadingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::products::{ItemList, ProductDetail};
use crate::pages::settings::SettingsPage;
use crate::pages::signup::SignupPage;
use crate::state::services::Services;
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::new(ClientConfig::from_build_env());
    provide_context(services.clone());
    provide_session(&services);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        services.identity.start().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gaupal.css"/>
        <Title text="Gaupal"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("farmer") view=FarmerArea>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=FARMER_LANDING/> }/>
                    <Route path=StaticSegment("dashboard") view=FarmerDashboard/>
                    <Route path=StaticSegment("manage-cow") view=CattleManagement/>
                    <Route path=StaticSegment("products") view=|| view! { <ItemList base="/farmer"/> }/>
                    <Route
                        path=(StaticSegment("product"), ParamSegment("productId"))
                        view=|| view! { <ProductDetail base="/farmer"/> }
                    />
                    <Route path=StaticSegment("breed") view=BreedCompatibility/>
                    <Route path=StaticSegment("disease") view=DiseaseQna/>
                    <Route path=StaticSegment("disease-qna") view=DiseaseQna/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("article") view=|| view! { <ArticleList base="/farmer"/> }/>
                    <Route
                        path=(StaticSegment("article"), ParamSegment("articleId"))
                        view=|| view! { <ArticleDetail base="/farmer"/> }
                    />
                    <Route path=StaticSegment("events") view=EventList/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("buyer") view=BuyerArea>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=BUYER_LANDING/> }/>
                    <Route path=StaticSegment("dashboard") view=BuyerDashboard/>
                    <Route path=StaticSegment("breed") view=BreedExplorer/>
                    <Route path=StaticSegment("item-list") view=|| view! { <ItemList base="/buyer"/> }/>
                    <Route
                        path=(StaticSegment("product"), ParamSegment("productId"))
                        view=|| view! { <ProductDetail base="/buyer"/> }
                    />
                    <Route path=StaticSegment("article") view=|| view! { <ArticleList base="/buyer"/> }/>
                    <Route
                        path=(StaticSegment("article"), ParamSegment("articleId"))
                        view=|| view! { <ArticleDetail base="/buyer"/> }
                    />
                </ParentRoute>
                <Route path=StaticSegment("loading") view=LoadingPage/>
            </Routes>
        </Router>
    }
}
