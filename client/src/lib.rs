//! # client
//!
//! Leptos + WASM frontend for the Academy site and its admin portal.
//!
//! Public pages render inside `SiteLayout` (header, footer, scroll-to-top).
//! The `/admin` section is guarded by `AdminShell`, which asks the external
//! auth service for the current session once per mount and redirects to `/`
//! when nobody is signed in.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
