//! WebSocket transport for the chat channel.
//!
//! Owns the socket lifecycle: connect, forward queued outgoing events,
//! decode inbound events into the view, and reconnect with exponential
//! backoff after a disconnect. Each socket that actually reaches the open
//! state is reported to the view as [`InboundEvent::Connect`], which is what
//! makes the view re-join its room after a reconnect.
//!
//! Queue items are only dequeued while the socket is open; one taken just as
//! the socket drops is held in the [`Outbox`] and sent first next time.
//!
//! Browser only; compiled with the `hydrate` feature.

use std::rc::Rc;

use futures::channel::mpsc::{UnboundedReceiver, unbounded};
use futures::future::Either;
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::{Message, State};
use leptos::prelude::{RwSignal, Update};

use crate::client_view::ChatClientView;
use crate::net::channel::{Channel, EventSender};
use crate::net::events::{InboundEvent, decode_inbound};
use crate::net::outbox::Outbox;
use crate::state::chat::{ChatState, ConnectionStatus};
use crate::util::clock::Clock;

const INITIAL_BACKOFF_MS: u32 = 1000;
const MAX_BACKOFF_MS: u32 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum SocketError {
    #[error("failed to open socket: {0}")]
    Open(String),
    #[error("socket closed before it opened")]
    NeverOpened,
    #[error("socket send failed: {0}")]
    Send(String),
    #[error("socket receive failed: {0}")]
    Receive(String),
}

/// Outgoing queue shared by the view (sender side) and the socket task
/// (receiver side).
pub fn outgoing_queue() -> (EventSender, UnboundedReceiver<String>) {
    let (tx, rx) = unbounded::<String>();
    (EventSender::new(tx), rx)
}

/// Spawn the socket lifecycle as a local task.
pub fn spawn_socket<C, K>(
    url: String,
    rx: UnboundedReceiver<String>,
    view: Rc<ChatClientView<C, K>>,
    chat: RwSignal<ChatState>,
) where
    C: Channel + 'static,
    K: Clock + 'static,
{
    leptos::task::spawn_local(socket_loop(url, rx, view, chat));
}

async fn socket_loop<C: Channel, K: Clock>(
    url: String,
    mut rx: UnboundedReceiver<String>,
    view: Rc<ChatClientView<C, K>>,
    chat: RwSignal<ChatState>,
) {
    let mut backoff_ms = INITIAL_BACKOFF_MS;
    let mut outbox = Outbox::default();

    loop {
        chat.update(|c| c.connection = ConnectionStatus::Connecting);

        match connect_and_run(&url, &mut rx, &mut outbox, &view, chat, &mut backoff_ms).await {
            Ok(()) => log::info!("chat socket closed"),
            Err(e) => log::warn!("chat socket error: {e}"),
        }

        chat.update(|c| c.connection = ConnectionStatus::Disconnected);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(MAX_BACKOFF_MS);
    }
}

/// Run one connection until the socket closes or errors.
async fn connect_and_run<C: Channel, K: Clock>(
    url: &str,
    rx: &mut UnboundedReceiver<String>,
    outbox: &mut Outbox,
    view: &ChatClientView<C, K>,
    chat: RwSignal<ChatState>,
    backoff_ms: &mut u32,
) -> Result<(), SocketError> {
    let mut ws = WebSocket::open(url).map_err(|e| SocketError::Open(e.to_string()))?;

    // Resolves once the socket leaves CONNECTING, whether it opened or not.
    futures::future::poll_fn(|cx| SinkExt::<Message>::poll_ready_unpin(&mut ws, cx))
        .await
        .map_err(|e| SocketError::Open(e.to_string()))?;
    if ws.state() != State::Open {
        return Err(SocketError::NeverOpened);
    }

    *backoff_ms = INITIAL_BACKOFF_MS;
    chat.update(|c| view.handle(c, InboundEvent::Connect));

    if let Some(text) = outbox.take_held() {
        send_or_hold(&mut ws, outbox, text).await?;
        if outbox.is_holding() {
            return Ok(());
        }
    }

    loop {
        let next = futures::future::select(ws.next(), rx.next()).await;
        match next {
            Either::Left((incoming, pending_rx)) => {
                drop(pending_rx);
                match incoming {
                    Some(Ok(Message::Text(text))) => match decode_inbound(&text) {
                        Ok(event) => chat.update(|c| view.handle(c, event)),
                        Err(e) => log::warn!("ignoring inbound message: {e}"),
                    },
                    Some(Ok(Message::Bytes(_))) => {}
                    Some(Err(e)) => return Err(SocketError::Receive(e.to_string())),
                    None => return Ok(()),
                }
            }
            Either::Right((outgoing, pending_ws)) => {
                drop(pending_ws);
                // Every EventSender lives as long as the page; an ended queue means teardown.
                let Some(text) = outgoing else {
                    return Ok(());
                };
                send_or_hold(&mut ws, outbox, text).await?;
                if outbox.is_holding() {
                    return Ok(());
                }
            }
        }
    }
}

/// Write `text` if the socket is still open, otherwise hold it for the next
/// connection.
async fn send_or_hold(ws: &mut WebSocket, outbox: &mut Outbox, text: String) -> Result<(), SocketError> {
    if let Some(text) = outbox.route(ws.state() == State::Open, text) {
        ws.send(Message::Text(text))
            .await
            .map_err(|e| SocketError::Send(e.to_string()))?;
    }
    Ok(())
}
