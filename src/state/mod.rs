//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `identity` is fixed at startup; `chat` is the only mutable state and is
//! owned by a single `RwSignal` in the browser.

pub mod chat;
pub mod identity;
