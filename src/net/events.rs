//! Typed chat events exchanged with the real-time channel.
//!
//! DESIGN
//! ======
//! Each event travels as one JSON text message of the form
//! `{"event": "<name>", "data": <payload>}`. Payload shapes mirror what the
//! chat server emits and consumes, so serde round-trips stay lossless and the
//! view can dispatch on enum variants instead of string names.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`encode_outbound`] and [`decode_inbound`].
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// An outgoing event could not be serialized.
    #[error("failed to encode event: {0}")]
    Encode(#[source] serde_json::Error),
    /// Inbound text was not valid JSON or named an unknown event.
    #[error("failed to decode event: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A single chat line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name of the sender.
    pub nickname: String,
    /// Message body, already trimmed by the sender.
    pub message: String,
    /// Room the message belongs to. Server broadcasts omit it.
    #[serde(default)]
    pub room: String,
    /// Pre-formatted hour:minute display string chosen by the sender.
    pub timestamp: String,
}

/// Payload of `join` and `leave`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPresence {
    pub nickname: String,
    pub room: String,
}

/// Server-originated informational line (joins, leaves, system notes).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusNotice {
    /// Style class for the rendered line, e.g. `"info"` or `"warning"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub msg: String,
}

/// Events this client emits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum OutboundEvent {
    Message(ChatMessage),
    Join(RoomPresence),
    Leave(RoomPresence),
}

impl OutboundEvent {
    /// Wire name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Join(_) => "join",
            Self::Leave(_) => "leave",
        }
    }
}

/// Events this client reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum InboundEvent {
    /// The underlying channel (re)established its connection.
    Connect,
    /// Recent room history, oldest first.
    LoadHistory(Vec<ChatMessage>),
    Status(StatusNotice),
    ChatMessage(ChatMessage),
}

/// Serialize an outgoing event into its JSON text form.
///
/// # Errors
///
/// Returns [`EventError::Encode`] if serialization fails.
pub fn encode_outbound(event: &OutboundEvent) -> Result<String, EventError> {
    serde_json::to_string(event).map_err(EventError::Encode)
}

/// Parse one inbound JSON text message.
///
/// # Errors
///
/// Returns [`EventError::Decode`] for malformed JSON, unknown event names,
/// or payloads that do not match the event's shape.
pub fn decode_inbound(text: &str) -> Result<InboundEvent, EventError> {
    serde_json::from_str(text).map_err(EventError::Decode)
}
