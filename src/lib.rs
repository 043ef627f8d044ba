//! # knox-chat
//!
//! Leptos + WASM chat client for server-rendered room pages.
//!
//! The server renders the chat page with the user's nickname and room baked
//! in. This crate attaches to that page, joins the room over a WebSocket
//! event channel, renders history, live messages and status notices into the
//! message list, and sends what the user types.
//!
//! Everything except the browser glue (`app`, `net::socket`) compiles and is
//! tested natively; the `hydrate` feature enables the WASM entry point.

pub mod app;
pub mod client_view;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    app::start();
}
