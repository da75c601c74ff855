//! # client
//!
//! Leptos + WASM frontend for the RAD-ETHIX chest X-ray triage tool.
//!
//! This crate contains pages, components, reactive state, and the REST calls
//! to the external prediction/report backend. Pure workflow logic lives in
//! the `triage` crate; this crate wires it to the DOM.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
