//! # client
//!
//! Leptos + WASM front-end for the Gaupal farm-management and marketplace
//! app. Pages are mounted behind route guards evaluated by the `gate` crate;
//! this crate wires those decisions into the router, the browser identity
//! session, and the `localStorage` session cache.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
