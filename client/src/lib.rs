//! # client
//!
//! Leptos + WASM single-page frontend for the Acme portal.
//!
//! This crate contains the route table and navigation guard, the auth and
//! alert stores, the pages and shell components, and the browser bindings
//! (storage, timers, window hooks) those stores are injected with. Building
//! with the `csr` feature produces the browser bundle; without it the crate
//! compiles natively so stores and guards can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: build the application context and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let ctx = context::AppContext::browser();
    util::global_hook::install_show_alert(ctx.alerts.clone());
    log::info!("{} starting (signed in: {})", config::APP_TITLE, ctx.auth.is_authenticated());

    leptos::mount::mount_to_body(move || view! { <app::App ctx=ctx/> });
}
