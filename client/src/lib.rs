//! # channa-client
//!
//! Leptos + WASM frontend for the Channa AI chat assistant.
//!
//! This crate contains pages, components, application state, network types,
//! and the HTTP helper that talks to the `/chat` responder. The same crate is
//! compiled twice: with `ssr` for server rendering inside `channa-server`, and
//! with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach reactivity to the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("channa client hydrating");
    leptos::mount::hydrate_body(app::App);
}
