//! # client
//!
//! Leptos front end for imagedrop: sign in, then drop images into the bucket
//! and manage the resulting gallery.
//!
//! ARCHITECTURE
//! ============
//! `state` holds plain data types, `services` owns every backend call and the
//! state transitions that follow, and `pages` / `components` only wire DOM
//! events to services and render state. The same crate is compiled twice:
//! with `ssr` for the Axum host and with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point called by the generated WASM loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
