//! # activities-client
//!
//! Leptos + WASM frontend for browsing extracurricular activities and
//! managing sign-ups.
//!
//! This crate contains the page controller, components, state models and the
//! REST client for the activities API. The `hydrate` feature builds the
//! browser bundle; `ssr` renders the same components on the host server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
