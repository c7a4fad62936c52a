//! # snipzo-client
//!
//! Leptos + WASM front-end for the Snipzo URL shortener.
//!
//! This crate contains pages, components, the session store and list state,
//! and the REST client for the external backend. The `ssr` build is rendered
//! by the host binary; the `hydrate` build runs in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging, then hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
