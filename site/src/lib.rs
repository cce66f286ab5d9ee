//! # site
//!
//! Leptos + WASM front end for the Maison Doré restaurant site.
//!
//! This crate contains pages, components, and the browser-free state models
//! behind them: the multi-step reservation widget, the standalone reservation
//! form, navigation chrome, scroll reveals, the gallery lightbox, and the
//! newsletter sign-up. It is rendered on the server (`ssr`) and hydrated in
//! the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Maison Doré – Fine Dining Restaurant");
    leptos::mount::hydrate_body(app::App);
}
