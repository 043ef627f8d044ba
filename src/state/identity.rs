//! Local user identity read from the chat page.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::config::{NICKNAME_ID, ROOM_ID};
use crate::net::events::RoomPresence;
use crate::util::page::PageSource;

pub const DEFAULT_NICKNAME: &str = "Anonymous";
pub const DEFAULT_ROOM: &str = "general";

/// Who this client is and which room it is in.
///
/// Fixed for the lifetime of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub nickname: String,
    pub room: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self { nickname: DEFAULT_NICKNAME.to_owned(), room: DEFAULT_ROOM.to_owned() }
    }
}

impl Identity {
    /// Read the nickname and room display elements.
    ///
    /// The room element may be an input (its value wins) or plain text.
    /// Missing or blank elements fall back to the defaults.
    pub fn from_page(page: &impl PageSource) -> Self {
        let nickname = non_blank(page.text_content(NICKNAME_ID)).unwrap_or_else(|| DEFAULT_NICKNAME.to_owned());
        let room = non_blank(page.input_value(ROOM_ID))
            .or_else(|| non_blank(page.text_content(ROOM_ID)))
            .unwrap_or_else(|| DEFAULT_ROOM.to_owned());
        Self { nickname, room }
    }

    /// `join`/`leave` payload for this identity.
    #[must_use]
    pub fn presence(&self) -> RoomPresence {
        RoomPresence { nickname: self.nickname.clone(), room: self.room.clone() }
    }

    /// Whether a message with this sender nickname is our own.
    #[must_use]
    pub fn owns(&self, nickname: &str) -> bool {
        self.nickname == nickname
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
