//! Farmer and buyer area layouts.
//!
//! Each area is gated once at its root; child pages render inside the
//! layout's outlet and inherit the gate.

use gate::Page;
use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::area_nav::AreaNav;
use crate::components::gated::Gated;

#[component]
fn AreaLayout(area: Page) -> impl IntoView {
    view! {
        <div class="area">
            <AreaNav area=area/>
            <main class="area__content">
                <Outlet/>
            </main>
        </div>
    }
}

#[component]
pub fn FarmerArea() -> impl IntoView {
    view! {
        <Gated page=Page::FarmerArea>
            <AreaLayout area=Page::FarmerArea/>
        </Gated>
    }
}

#[component]
pub fn BuyerArea() -> impl IntoView {
    view! {
        <Gated page=Page::BuyerArea>
            <AreaLayout area=Page::BuyerArea/>
        </Gated>
    }
}
