//! Client configuration captured once at startup.
//!
//! Everything the view needs to know about its environment comes from the
//! server-rendered page: the identity elements and an optional socket path
//! override on the message container. Nothing is read from storage or the
//! URL query.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::identity::Identity;
use crate::util::page::PageSource;

/// Message list container. Its absence disables the client.
pub const MESSAGES_ID: &str = "chat-messages";
pub const FORM_ID: &str = "message-form";
pub const INPUT_ID: &str = "message-input";
pub const NICKNAME_ID: &str = "nickname-display";
pub const ROOM_ID: &str = "room-display";

/// Attribute on the message container that overrides [`DEFAULT_SOCKET_PATH`].
pub const SOCKET_PATH_ATTR: &str = "data-socket-path";
pub const DEFAULT_SOCKET_PATH: &str = "/ws";
pub const DEFAULT_HOST: &str = "localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub identity: Identity,
    pub socket_path: String,
}

impl ClientConfig {
    /// Build config from the page.
    ///
    /// Returns `None` when the page has no message container, i.e. this is
    /// not a chat page.
    pub fn from_page(page: &impl PageSource) -> Option<Self> {
        if !page.has_element(MESSAGES_ID) {
            return None;
        }

        let socket_path = page
            .attribute(MESSAGES_ID, SOCKET_PATH_ATTR)
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_SOCKET_PATH.to_owned());

        Some(Self { identity: Identity::from_page(page), socket_path })
    }

    /// WebSocket URL for a page served from `href` on `host`.
    ///
    /// Secure pages get `wss://`; anything else gets `ws://`. An empty host
    /// falls back to [`DEFAULT_HOST`].
    #[must_use]
    pub fn socket_url(&self, href: &str, host: &str) -> String {
        let proto = if href.starts_with("https") { "wss" } else { "ws" };
        let host = if host.is_empty() { DEFAULT_HOST } else { host };
        let path = self.socket_path.trim_start_matches('/');
        format!("{proto}://{host}/{path}")
    }
}
