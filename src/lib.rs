//! # storefront-ui
//!
//! Leptos + WASM presentational layer for the Sole&Ankle shoe storefront:
//! responsive header, animated slide-in mobile menu, and the product card
//! used on listing pages.
//!
//! The crate splits renderer-agnostic logic (catalog types, price
//! formatting, new-release classification, menu state) from the view
//! components that consume it, so every display rule is a pure function
//! with the clock injected rather than read ambiently.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

/// Hydration entrypoint for the WASM client build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
