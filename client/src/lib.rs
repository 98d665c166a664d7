//! # practice-client
//!
//! Leptos frontend for the practice website: home, insights (blog) and
//! contact pages inside a shared navigation/footer shell.
//!
//! This crate contains pages, components, view-state machines, the static
//! content provider, and the browser helpers used for scroll handling and
//! viewport reveal effects. It is rendered on the server by `practice-server`
//! (`ssr` feature) and hydrated in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attaches the reactive app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
