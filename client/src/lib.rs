//! # taskdesk-client
//!
//! Leptos + WASM frontend for the task-management service.
//!
//! This crate contains the routed pages, shared components, reactive
//! application state, and the typed REST client for the task backend. The
//! `ssr` feature renders the same `App` on the host server; the `hydrate`
//! feature attaches it in the browser.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
