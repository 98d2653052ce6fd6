//! # client
//!
//! Leptos frontend for GeoLearn, rendered on the server and hydrated in the
//! browser.
//!
//! This crate contains the navigation shell, the chapter pages, their plain
//! state structs, and the SVG components the pages draw with. All geometry
//! comes from the `geometry` crate; nothing here does trigonometry.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly; keep the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
