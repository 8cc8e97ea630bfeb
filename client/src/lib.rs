//! # evonto-client
//!
//! Leptos + WASM frontend for the Evonto event planner.
//!
//! This crate contains pages, components, and the browser bindings (a
//! `gloo-net` transport and a `localStorage` backend) for the `evonto`
//! core. Session, request, and validation logic all live in `evonto`; this
//! crate only wires it to signals and markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
