//! Listing Dashboard - Leptos frontend
//!
//! Renders the inventory and transfer listing as cards and routes each card
//! to its module's detail screen.

pub mod api;
pub mod app;
pub mod components;
pub mod navigation;

pub use app::App;

/// Client-side entry point for the WASM bundle
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    leptos::mount::mount_to_body(App);
}
