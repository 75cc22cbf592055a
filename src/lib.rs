//! # panaderia-admin
//!
//! Leptos + WASM administrative console for the bakery back office:
//! sign-in and session handling, role/permission management, user
//! administration, and product-category configuration against the
//! remote REST API under `/api`.
//!
//! The client-side authorization model lives in `session` (persisted
//! session record), `state::auth` (process-wide auth state and
//! permission predicates), and `guards` (route gates). Everything the
//! server decides is authoritative; the gates here only shape what the
//! UI offers before the server re-validates.

pub mod app;
pub mod components;
pub mod guards;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
