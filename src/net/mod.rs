//! Networking modules for the real-time chat channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `events` defines the typed wire schema, `channel` the publish seam the
//! view emits through, `outbox` the hold-until-open hand-off, and `socket`
//! the browser WebSocket lifecycle.

pub mod channel;
pub mod events;
pub mod outbox;
#[cfg(feature = "hydrate")]
pub mod socket;
