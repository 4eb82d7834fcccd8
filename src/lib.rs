//! # sahyog
//!
//! Leptos + WASM frontend for the Sahyog community-engagement platform:
//! events, volunteering, donations, follows, chat, notifications, and
//! reviews over a REST backend.
//!
//! The crate is a thin view layer: typed resource clients wrap the REST
//! endpoints, an injected session context carries the one bearer token, and
//! route guards resolve the current actor before any role-gated screen
//! renders. All durable state lives on the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
