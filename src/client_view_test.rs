use super::*;
use crate::config::{MESSAGES_ID, NICKNAME_ID, ROOM_ID};
use crate::net::channel::RecordingChannel;
use crate::net::events::RoomPresence;
use crate::state::chat::{EntryBody, LOADING_PLACEHOLDER};
use crate::util::clock::FixedClock;
use crate::util::page::StaticPage;

type TestView = ChatClientView<RecordingChannel, FixedClock>;

fn view() -> TestView {
    ChatClientView::new(
        Identity { nickname: "alice".to_owned(), room: "lobby".to_owned() },
        RecordingChannel::default(),
        FixedClock("14:07"),
    )
}

fn message(nickname: &str, text: &str) -> ChatMessage {
    ChatMessage {
        nickname: nickname.to_owned(),
        message: text.to_owned(),
        room: String::new(),
        timestamp: "13:00".to_owned(),
    }
}

fn alice_presence() -> RoomPresence {
    RoomPresence { nickname: "alice".to_owned(), room: "lobby".to_owned() }
}

fn rendered_texts(state: &ChatState) -> Vec<String> {
    state
        .entries
        .iter()
        .map(|e| match &e.body {
            EntryBody::Message { message, .. } => message.message.clone(),
            EntryBody::Notice { text, .. } => text.clone(),
        })
        .collect()
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn attach_is_noop_without_message_container() {
    let page = StaticPage::default().with_text(NICKNAME_ID, "alice");
    let view = TestView::attach(&page, RecordingChannel::default(), FixedClock("00:00"));
    assert!(view.is_none());
}

#[test]
fn attach_reads_identity_from_page() {
    let page = StaticPage::default()
        .with_text(MESSAGES_ID, "")
        .with_text(NICKNAME_ID, "alice")
        .with_value(ROOM_ID, "lobby");
    let view = TestView::attach(&page, RecordingChannel::default(), FixedClock("00:00")).expect("chat page");
    assert_eq!(view.identity(), &Identity { nickname: "alice".to_owned(), room: "lobby".to_owned() });
}

// =============================================================
// Compose
// =============================================================

#[test]
fn submit_emits_trimmed_message_and_clears_draft() {
    let view = view();
    let mut draft = "  hi  ".to_owned();

    let sent = view.submit(&mut draft).expect("message sent");

    let expected = ChatMessage {
        nickname: "alice".to_owned(),
        message: "hi".to_owned(),
        room: "lobby".to_owned(),
        timestamp: "14:07".to_owned(),
    };
    assert_eq!(sent, expected);
    assert_eq!(view.channel.take(), vec![OutboundEvent::Message(expected)]);
    assert!(draft.is_empty());
}

#[test]
fn submit_ignores_blank_drafts() {
    let view = view();
    for blank in ["", "   ", "\t\n"] {
        let mut draft = blank.to_owned();
        assert!(view.submit(&mut draft).is_none());
        assert_eq!(draft, blank);
    }
    assert!(view.channel.take().is_empty());
}

#[test]
fn submit_clears_draft_even_when_channel_is_closed() {
    let view = ChatClientView::new(Identity::default(), RecordingChannel::closed(), FixedClock("08:00"));
    let mut draft = "anyone there?".to_owned();

    assert!(view.submit(&mut draft).is_some());
    assert!(draft.is_empty());
    assert_eq!(view.channel.take().len(), 1);
}

#[test]
fn submit_sends_markup_verbatim() {
    let view = view();
    let mut draft = "<b>bold</b>".to_owned();
    let sent = view.submit(&mut draft).expect("message sent");
    assert_eq!(sent.message, "<b>bold</b>");
}

// =============================================================
// Connect / teardown
// =============================================================

#[test]
fn connect_emits_join_and_marks_connected() {
    let view = view();
    let mut state = ChatState::default();

    view.handle(&mut state, InboundEvent::Connect);

    assert_eq!(view.channel.take(), vec![OutboundEvent::Join(alice_presence())]);
    assert_eq!(state.connection, ConnectionStatus::Connected);
    assert_eq!(rendered_texts(&state), [LOADING_PLACEHOLDER]);
}

#[test]
fn every_reconnect_rejoins() {
    let view = view();
    let mut state = ChatState::default();
    view.handle(&mut state, InboundEvent::Connect);
    view.handle(&mut state, InboundEvent::Connect);
    assert_eq!(view.channel.take().len(), 2);
}

#[test]
fn teardown_emits_single_leave() {
    let view = view();
    view.teardown();
    assert_eq!(view.channel.take(), vec![OutboundEvent::Leave(alice_presence())]);
}

#[test]
fn teardown_attempts_leave_on_closed_channel() {
    let view = ChatClientView::new(
        Identity { nickname: "alice".to_owned(), room: "lobby".to_owned() },
        RecordingChannel::closed(),
        FixedClock("08:00"),
    );
    view.teardown();
    assert_eq!(view.channel.take(), vec![OutboundEvent::Leave(alice_presence())]);
}

// =============================================================
// History
// =============================================================

#[test]
fn empty_history_shows_single_placeholder() {
    let view = view();
    let mut state = ChatState::default();

    view.handle(&mut state, InboundEvent::LoadHistory(Vec::new()));

    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.message_count(), 0);
    assert_eq!(
        state.entries[0].body,
        EntryBody::Notice { kind: "info".to_owned(), text: EMPTY_HISTORY_PLACEHOLDER.to_owned() }
    );
    assert_eq!(state.scroll_seq, 1);
}

#[test]
fn history_renders_in_order_with_ownership() {
    let view = view();
    let mut state = ChatState::default();
    let history = vec![message("bob", "one"), message("alice", "two"), message("carol", "three")];

    view.load_history(&mut state, history);

    assert_eq!(rendered_texts(&state), ["one", "two", "three"]);
    let ownership: Vec<_> = state
        .entries
        .iter()
        .filter_map(|e| match &e.body {
            EntryBody::Message { ownership, .. } => Some(*ownership),
            EntryBody::Notice { .. } => None,
        })
        .collect();
    assert_eq!(ownership, [Ownership::Other, Ownership::Own, Ownership::Other]);
}

#[test]
fn second_history_load_replaces_content() {
    let view = view();
    let mut state = ChatState::default();

    view.load_history(&mut state, vec![message("bob", "old")]);
    view.on_status(&mut state, StatusNotice { kind: "info".to_owned(), msg: "carol joined".to_owned() });
    view.load_history(&mut state, vec![message("bob", "old"), message("carol", "new")]);

    assert_eq!(rendered_texts(&state), ["old", "new"]);
    assert_eq!(state.message_count(), 2);
}

// =============================================================
// Live events
// =============================================================

#[test]
fn status_appends_notice_without_clearing() {
    let view = view();
    let mut state = ChatState::default();
    view.load_history(&mut state, vec![message("bob", "hey")]);

    view.handle(
        &mut state,
        InboundEvent::Status(StatusNotice { kind: "join".to_owned(), msg: "bob joined".to_owned() }),
    );

    assert_eq!(state.entries.len(), 2);
    let last = state.entries.last().expect("notice");
    assert_eq!(last.class_name(), "chat-message join");
    assert_eq!(last.body, EntryBody::Notice { kind: "join".to_owned(), text: "bob joined".to_owned() });
    assert_eq!(state.scroll_seq, 2);
}

#[test]
fn chat_message_appends_and_scrolls() {
    let view = view();
    let mut state = ChatState::default();
    view.load_history(&mut state, Vec::new());

    view.handle(&mut state, InboundEvent::ChatMessage(message("alice", "mine")));
    view.handle(&mut state, InboundEvent::ChatMessage(message("bob", "theirs")));

    assert_eq!(rendered_texts(&state), [EMPTY_HISTORY_PLACEHOLDER, "mine", "theirs"]);
    assert_eq!(state.entries[1].class_name(), "chat-message my-message");
    assert_eq!(state.entries[2].class_name(), "chat-message other-message");
    assert_eq!(state.scroll_seq, 3);
}

#[test]
fn live_events_never_emit() {
    let view = view();
    let mut state = ChatState::default();
    view.handle(&mut state, InboundEvent::LoadHistory(vec![message("bob", "x")]));
    view.handle(&mut state, InboundEvent::ChatMessage(message("bob", "y")));
    view.handle(&mut state, InboundEvent::Status(StatusNotice { kind: "info".to_owned(), msg: "z".to_owned() }));
    assert!(view.channel.take().is_empty());
}
