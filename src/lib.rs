//! # encore-client
//!
//! Leptos + WASM frontend for the Encore show and photo sharing
//! application. Pages and components render on top of a shared
//! authentication context; the session lifecycle (restore, login, MFA
//! verification, logout) lives in `state` behind trait seams over the REST
//! transport and the persisted token store.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client-side app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
