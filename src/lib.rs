//! # homepage
//!
//! Leptos + WASM client for the erez.ac personal site.
//!
//! This crate holds the session store and its HTTP client, the route table
//! with its authorization guard and navigation pipeline, locale-aware title
//! resolution, and the small set of components that host them. The site is
//! pre-rendered with the `ssr` feature and hydrated with `hydrate`.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs the console logger and panic hook, then
/// hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
