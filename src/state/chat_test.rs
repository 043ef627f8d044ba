use super::*;

fn message(nickname: &str) -> ChatMessage {
    ChatMessage {
        nickname: nickname.to_owned(),
        message: "hello".to_owned(),
        room: "lobby".to_owned(),
        timestamp: "12:00".to_owned(),
    }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_shows_loading_placeholder() {
    let state = ChatState::default();
    assert_eq!(state.entries.len(), 1);
    assert_eq!(
        state.entries[0].body,
        EntryBody::Notice { kind: "info".to_owned(), text: LOADING_PLACEHOLDER.to_owned() }
    );
    assert_eq!(state.message_count(), 0);
    assert_eq!(state.scroll_seq, 0);
    assert_eq!(state.connection, ConnectionStatus::Connecting);
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn clear_removes_placeholder() {
    let mut state = ChatState::default();
    state.clear();
    assert!(state.entries.is_empty());
}

#[test]
fn push_appends_in_order_with_distinct_keys() {
    let mut state = ChatState::default();
    state.clear();
    state.push_message(message("alice"), Ownership::Own);
    state.push_notice("warning", "bob left");
    state.push_message(message("bob"), Ownership::Other);

    assert_eq!(state.entries.len(), 3);
    assert_eq!(state.message_count(), 2);
    assert!(state.entries[0].is_message());
    assert!(!state.entries[1].is_message());
    assert_ne!(state.entries[0].key, state.entries[2].key);
}

#[test]
fn request_scroll_bumps_sequence() {
    let mut state = ChatState::default();
    state.request_scroll();
    state.request_scroll();
    assert_eq!(state.scroll_seq, 2);
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn class_name_reflects_ownership() {
    assert_eq!(ChatEntry::message(message("a"), Ownership::Own).class_name(), "chat-message my-message");
    assert_eq!(ChatEntry::message(message("a"), Ownership::Other).class_name(), "chat-message other-message");
}

#[test]
fn class_name_uses_notice_kind() {
    assert_eq!(ChatEntry::notice("join", "bob joined").class_name(), "chat-message join");
}

#[test]
fn connection_status_labels() {
    assert_eq!(ConnectionStatus::Connecting.as_str(), "connecting");
    assert_eq!(ConnectionStatus::Connected.as_str(), "connected");
    assert_eq!(ConnectionStatus::Disconnected.as_str(), "disconnected");
}
