//! # client
//!
//! Leptos + WASM frontend for the session-gated auth app.
//!
//! This crate contains the route-level pages (landing, dashboard), the shared
//! session state and its accessor, redirect gating, and the small set of
//! presentational components they render. The `authapp` host crate renders it
//! on the server (`ssr`) and the browser hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive runtime to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
