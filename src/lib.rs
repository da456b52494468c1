//! # capabot-client
//!
//! Leptos + WASM frontend for the CapaBot resume-to-job matcher.
//!
//! The page hosts two controllers. The analysis controller posts resume and
//! job text to `/analyze` and renders the score, a doughnut chart, and the
//! matching/missing skill lists. The chat controller drives an assistant
//! widget that forwards messages, a context snapshot, and a rolling history
//! window to `/chat`.
//!
//! Browser-only code is gated behind the `csr` feature; everything else
//! (state transitions, wire types, async controllers) is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod controllers;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // No `log` backend is usable here, so report straight to the console.
        web_sys::console::warn_1(&format!("console_log init failed: {err}").into());
    }
    log::info!("capabot client starting");
    leptos::mount::mount_to_body(app::App);
}
