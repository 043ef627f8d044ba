//! Message list model backing the chat view.
//!
//! DESIGN
//! ======
//! The list is append-only between history loads: a history load clears it,
//! every other event pushes to the end. Scrolling is expressed as a request
//! counter (`scroll_seq`) that the rendering component watches, so state
//! updates stay testable without a DOM.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::events::ChatMessage;

/// Shown until the first history load replaces it.
pub const LOADING_PLACEHOLDER: &str = "Loading messages...";
/// Shown when a history load brings no messages.
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "No messages yet. Start the conversation!";
/// Notice kind used for both placeholders.
pub const PLACEHOLDER_KIND: &str = "info";

/// Connection status of the underlying channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }
}

/// Whether a message was sent under the local nickname.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    Own,
    Other,
}

impl Ownership {
    /// Style class distinguishing own messages from everyone else's.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Own => "my-message",
            Self::Other => "other-message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryBody {
    Message { message: ChatMessage, ownership: Ownership },
    /// Status line or placeholder; `kind` doubles as its style class.
    Notice { kind: String, text: String },
}

/// One rendered line in the message list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    /// Stable key for keyed rendering.
    pub key: uuid::Uuid,
    pub body: EntryBody,
}

impl ChatEntry {
    pub fn message(message: ChatMessage, ownership: Ownership) -> Self {
        Self { key: uuid::Uuid::new_v4(), body: EntryBody::Message { message, ownership } }
    }

    pub fn notice(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self { key: uuid::Uuid::new_v4(), body: EntryBody::Notice { kind: kind.into(), text: text.into() } }
    }

    /// Full class list for the entry's container element.
    #[must_use]
    pub fn class_name(&self) -> String {
        match &self.body {
            EntryBody::Message { ownership, .. } => format!("chat-message {}", ownership.class()),
            EntryBody::Notice { kind, .. } => format!("chat-message {kind}"),
        }
    }

    #[must_use]
    pub fn is_message(&self) -> bool {
        matches!(self.body, EntryBody::Message { .. })
    }
}

/// State for the chat message list.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    /// Bumped on every scroll-to-bottom request.
    pub scroll_seq: u64,
    pub connection: ConnectionStatus,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            entries: vec![ChatEntry::notice(PLACEHOLDER_KIND, LOADING_PLACEHOLDER)],
            scroll_seq: 0,
            connection: ConnectionStatus::default(),
        }
    }
}

impl ChatState {
    /// Remove every entry, placeholders included.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push_message(&mut self, message: ChatMessage, ownership: Ownership) {
        self.entries.push(ChatEntry::message(message, ownership));
    }

    pub fn push_notice(&mut self, kind: impl Into<String>, text: impl Into<String>) {
        self.entries.push(ChatEntry::notice(kind, text));
    }

    pub fn request_scroll(&mut self) {
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
    }

    /// Number of chat messages, excluding notices.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_message()).count()
    }
}
