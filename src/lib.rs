//! # schoolhub-client
//!
//! Leptos + WASM frontend for the school management dashboard.
//!
//! This crate owns the client side of the session lifecycle: the token store
//! backed by `localStorage`, structural decoding of access-token claims, the
//! login / verification / password-reset / logout flows against the REST
//! backend, and role-gated navigation for admin, teacher, student and parent
//! sessions.

pub mod app;
pub mod components;
pub mod config;
pub mod flows;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser entry point: install logging and hydrate the root component.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only fails when a logger is already installed.
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
