//! # client
//!
//! Leptos + WASM frontend: the page layout, the session-aware navigation bar,
//! and the glue to the external auth service that owns sign-in, sign-out and
//! the session itself.
//!
//! Built with `ssr` when linked into the server and with `hydrate` for the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
