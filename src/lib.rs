//! # lpa-client
//!
//! Leptos + WASM frontend for the factory layered-process-audit (LPA)
//! quality application.
//!
//! The crate is organized around the session lifecycle: `session` owns the
//! credential store, the identity cache, the idle watchdog, and the
//! navigation gate; `net` owns the authorized HTTP path; `pages` and
//! `components` are thin consumers that read `is_authenticated`/`role`
//! and issue requests through the gateway.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the application into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
