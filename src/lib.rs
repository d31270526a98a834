//! # retouch
//!
//! Leptos + WASM frontend for the Retouch AI photo service. Each page wires a
//! feature of the remote image backend (object removal, colorization,
//! super-resolution, face restoration, text-to-image, image-to-video) to the
//! REST layer and renders results and per-user galleries.
//!
//! This crate contains pages, components, client state, and the REST layer.
//! It integrates with the `easel` crate for the imperative mask-painting
//! canvases via the `CanvasHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and console logging, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
