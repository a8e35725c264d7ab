//! # routeform
//!
//! Leptos + WASM client for the route distance planner: six persisted
//! coordinate fields, a route-type toggle, and a derived distance field.
//!
//! The field, storage, wiring, and math modules are pure Rust and tested
//! natively; the view layer binds them to the page through signal-backed
//! controls.

pub mod app;
pub mod components;
pub mod fields;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// Client entry point: install logging hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
