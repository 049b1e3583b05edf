//! # groupchat
//!
//! Leptos + WASM client for a group chat service. Lists groups, opens one at
//! a time (history over REST, live messages over a per-group websocket),
//! shows who is active and reacts to server notifications about new groups.
//!
//! Browser glue is behind the `csr` feature; without it the crate compiles
//! with inert stubs so the session logic can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("groupchat starting");
    leptos::mount::mount_to_body(app::App);
}
