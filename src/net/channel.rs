//! Publish side of the real-time channel.
//!
//! The view only ever talks to the [`Channel`] trait. In the browser the
//! implementation is [`EventSender`], a handle onto the outgoing queue that
//! the socket task drains; tests substitute a recording fake.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use super::events::{EventError, OutboundEvent};

/// Error returned by [`Channel::emit`].
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// Nothing is draining the outgoing queue anymore.
    #[error("channel closed")]
    Closed,
    #[error(transparent)]
    Encode(#[from] EventError),
}

/// Something outgoing chat events can be handed to.
///
/// Emission is fire-and-forget: `Ok` means the event was queued, not that the
/// server received it.
pub trait Channel {
    /// Queue one event for delivery.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the event cannot be queued.
    fn emit(&self, event: &OutboundEvent) -> Result<(), ChannelError>;
}

/// Browser channel handle backed by the socket task's outgoing queue.
///
/// Cloning is cheap; all clones feed the same queue, which survives
/// reconnects.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct EventSender {
    tx: futures::channel::mpsc::UnboundedSender<String>,
}

#[cfg(feature = "hydrate")]
impl EventSender {
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

#[cfg(feature = "hydrate")]
impl Channel for EventSender {
    fn emit(&self, event: &OutboundEvent) -> Result<(), ChannelError> {
        let text = super::events::encode_outbound(event)?;
        self.tx.unbounded_send(text).map_err(|_| ChannelError::Closed)
    }
}

/// Test channel that records every emitted event.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingChannel {
    pub events: std::cell::RefCell<Vec<OutboundEvent>>,
    pub closed: bool,
}

#[cfg(test)]
impl RecordingChannel {
    pub fn closed() -> Self {
        Self { closed: true, ..Self::default() }
    }

    pub fn take(&self) -> Vec<OutboundEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
impl Channel for RecordingChannel {
    fn emit(&self, event: &OutboundEvent) -> Result<(), ChannelError> {
        // A closed channel still records the attempt so tests can assert on it.
        self.events.borrow_mut().push(event.clone());
        if self.closed { Err(ChannelError::Closed) } else { Ok(()) }
    }
}
