//! Chat view controller: compose, connect, render, leave.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatClientView` owns the immutable [`Identity`], a [`Channel`] to publish
//! on and a [`Clock`] for timestamps. Message list state is passed in by the
//! caller (`RwSignal<ChatState>::update` in the browser, a plain value in
//! tests) so every handler is a synchronous state transition.
//!
//! ERROR HANDLING
//! ==============
//! Emission failures are logged and otherwise ignored; the user gets no
//! feedback for messages that never leave the page.

#[cfg(test)]
#[path = "client_view_test.rs"]
mod client_view_test;

use crate::config::ClientConfig;
use crate::net::channel::Channel;
use crate::net::events::{ChatMessage, InboundEvent, OutboundEvent, StatusNotice};
use crate::state::chat::{ChatState, ConnectionStatus, EMPTY_HISTORY_PLACEHOLDER, Ownership, PLACEHOLDER_KIND};
use crate::state::identity::Identity;
use crate::util::clock::Clock;
use crate::util::page::PageSource;

pub struct ChatClientView<C, K> {
    identity: Identity,
    channel: C,
    clock: K,
}

impl<C: Channel, K: Clock> ChatClientView<C, K> {
    pub fn new(identity: Identity, channel: C, clock: K) -> Self {
        Self { identity, channel, clock }
    }

    /// Build a view for the current page.
    ///
    /// Returns `None` on pages without a message container.
    pub fn attach(page: &impl PageSource, channel: C, clock: K) -> Option<Self> {
        let config = ClientConfig::from_page(page)?;
        Some(Self::new(config.identity, channel, clock))
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Send the compose draft as a chat message.
    ///
    /// Blank drafts are dropped and left untouched. Otherwise the trimmed
    /// text is emitted as a `message` event and the draft is cleared, whether
    /// or not the channel accepted it.
    pub fn submit(&self, draft: &mut String) -> Option<ChatMessage> {
        let text = draft.trim();
        if text.is_empty() {
            return None;
        }

        let message = ChatMessage {
            nickname: self.identity.nickname.clone(),
            message: text.to_owned(),
            room: self.identity.room.clone(),
            timestamp: self.clock.display_time(),
        };
        self.emit(&OutboundEvent::Message(message.clone()));
        draft.clear();
        Some(message)
    }

    /// Announce ourselves to the room. Runs on every (re)connect.
    pub fn on_connect(&self) {
        self.emit(&OutboundEvent::Join(self.identity.presence()));
        log::info!("connected to chat channel as {} in {}", self.identity.nickname, self.identity.room);
    }

    /// Replace the whole list with `messages`.
    pub fn load_history(&self, state: &mut ChatState, messages: Vec<ChatMessage>) {
        state.clear();
        if messages.is_empty() {
            state.push_notice(PLACEHOLDER_KIND, EMPTY_HISTORY_PLACEHOLDER);
        }
        for message in messages {
            self.render_message(state, message);
        }
        state.request_scroll();
    }

    pub fn on_status(&self, state: &mut ChatState, notice: StatusNotice) {
        state.push_notice(notice.kind, notice.msg);
        state.request_scroll();
    }

    pub fn on_chat_message(&self, state: &mut ChatState, message: ChatMessage) {
        self.render_message(state, message);
        state.request_scroll();
    }

    /// Append one message, tagged by sender nickname.
    pub fn render_message(&self, state: &mut ChatState, message: ChatMessage) {
        let ownership = if self.identity.owns(&message.nickname) { Ownership::Own } else { Ownership::Other };
        state.push_message(message, ownership);
    }

    /// Best-effort `leave` while the page unloads.
    pub fn teardown(&self) {
        self.emit(&OutboundEvent::Leave(self.identity.presence()));
    }

    /// Route one inbound event to its handler.
    pub fn handle(&self, state: &mut ChatState, event: InboundEvent) {
        match event {
            InboundEvent::Connect => {
                state.connection = ConnectionStatus::Connected;
                self.on_connect();
            }
            InboundEvent::LoadHistory(messages) => self.load_history(state, messages),
            InboundEvent::Status(notice) => self.on_status(state, notice),
            InboundEvent::ChatMessage(message) => self.on_chat_message(state, message),
        }
    }

    fn emit(&self, event: &OutboundEvent) {
        if let Err(e) = self.channel.emit(event) {
            log::warn!("dropped outgoing {} event: {e}", event.name());
        }
    }
}
