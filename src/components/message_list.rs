//! Scrolling chat message list.
//!
//! Renders `ChatState` entries inside the page's `#chat-messages` container.
//! Every user-supplied string is interpolated as a text node, so nicknames
//! and message bodies can never inject markup.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::state::chat::{ChatEntry, ChatState, EntryBody};

/// Message list bound to the shared chat state.
///
/// Keeps the surrounding container pinned to the bottom whenever the state
/// requests a scroll, and mirrors the connection status onto the container
/// as `data-connection`.
#[component]
pub fn MessageList(chat: RwSignal<ChatState>) -> impl IntoView {
    Effect::new(move || {
        let _ = chat.with(|c| c.scroll_seq);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        let status = chat.with(|c| c.connection);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container() {
                let _ = el.set_attribute("data-connection", status.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = status;
        }
    });

    view! {
        <For
            each=move || chat.get().entries
            key=|entry| entry.key
            children=move |entry: ChatEntry| view! { <ChatLine entry=entry/> }
        />
    }
}

/// A single message or notice line.
#[component]
fn ChatLine(entry: ChatEntry) -> impl IntoView {
    let class = entry.class_name();
    match entry.body {
        EntryBody::Message { message, .. } => view! {
            <div class=class>
                <span class="message-timestamp">{message.timestamp}</span>
                <span class="message-nickname">{nickname_label(&message.nickname)}</span>
                <span class="message-text">{message.message}</span>
            </div>
        }
        .into_any(),
        EntryBody::Notice { text, .. } => view! {
            <div class=class>
                <em>{text}</em>
            </div>
        }
        .into_any(),
    }
}

fn nickname_label(nickname: &str) -> String {
    format!("{nickname}:")
}

#[cfg(feature = "hydrate")]
fn container() -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(crate::config::MESSAGES_ID)
}
