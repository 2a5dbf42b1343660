//! Session state machine.
//!
//! Owns the state projection of one broker connection and the append-only
//! message history. Pure state machine in the action pattern: events go in,
//! the snapshot mutates, actions for the driver come out. No I/O.
//!
//! # State machine
//!
//! ```text
//! NotStarted ──connect──> Connecting ──Opened──> Opened
//!                              │                   │ MessageReceived
//!                              │              ┌────┴────┐
//!                              │           Received  Closing ──> Closed
//!                              │
//!                 any state ──Failed──> Failed
//! ```
//!
//! `Closed` and `Failed` are terminal. There is no reconnection; a new
//! session instance is the retry path.

use std::time::Duration;

use crate::{
    codec,
    event::{SessionAction, SessionEvent, TransportEvent},
    message::ChatMessage,
    state::{ConnectionState, SessionSnapshot},
};

/// Delay between a send and the draft reset.
///
/// The original client cleared the input a beat after transmitting so the
/// field does not visually reset before the click handler finishes. The
/// driver schedules this as a cancellable timer tied to the session's
/// lifetime.
pub const DRAFT_CLEAR_DELAY: Duration = Duration::from_millis(50);

/// Session state machine for one broker connection.
///
/// All failure modes degrade to "nothing happens": empty sends are no-ops,
/// undecodable inbound frames are dropped and counted, transport failures
/// park the machine in [`ConnectionState::Failed`]. Nothing here is fatal to
/// the hosting process, so [`Session::handle`] is infallible.
#[derive(Debug, Clone, Default)]
pub struct Session {
    snapshot: SessionSnapshot,
}

impl Session {
    /// Create a session with no user id and an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a preset display name.
    pub fn with_user_id(user_id: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.snapshot.user_id = user_id.into();
        session
    }

    /// Mark the connection attempt as started.
    ///
    /// The driver calls this right before dialing the transport; success or
    /// failure arrives later as a [`TransportEvent`].
    pub fn begin_connect(&mut self) {
        self.snapshot.connection_state = ConnectionState::Connecting;
    }

    /// Current observable state.
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Process an event and return actions for the driver.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionAction> {
        match event {
            SessionEvent::Send => self.handle_send(),
            SessionEvent::SetUserId { user_id } => {
                self.snapshot.user_id = user_id;
                vec![]
            },
            SessionEvent::DraftChange { text } => {
                self.snapshot.draft_text = text;
                vec![]
            },
            SessionEvent::DraftClearElapsed => {
                self.snapshot.draft_text.clear();
                vec![]
            },
            SessionEvent::Transport(transport_event) => {
                self.handle_transport(transport_event);
                vec![]
            },
        }
    }

    /// Send the current draft: optimistic local append, then transmit.
    ///
    /// The broker does not confirm delivery, so the message lands in history
    /// immediately, before the draft-clear delay elapses.
    fn handle_send(&mut self) -> Vec<SessionAction> {
        if self.snapshot.draft_text.is_empty() {
            return vec![];
        }

        let message =
            ChatMessage::new(self.snapshot.draft_text.clone(), self.snapshot.user_id.clone());
        let payload = codec::encode(&message);
        self.snapshot.messages.push(message);

        vec![
            SessionAction::Transmit { payload },
            SessionAction::ClearDraftAfter { delay: DRAFT_CLEAR_DELAY },
        ]
    }

    /// Map a transport event onto the connection state projection.
    fn handle_transport(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Opened => {
                self.snapshot.connection_state = ConnectionState::Opened;
            },
            TransportEvent::Closing => {
                self.snapshot.connection_state = ConnectionState::Closing;
            },
            TransportEvent::Closed => {
                self.snapshot.connection_state = ConnectionState::Closed;
            },
            TransportEvent::Failed { reason } => {
                tracing::warn!(%reason, "transport failed");
                self.snapshot.connection_state = ConnectionState::Failed;
            },
            TransportEvent::MessageReceived { payload } => {
                self.snapshot.connection_state = ConnectionState::Received;
                self.handle_inbound(&payload);
            },
        }
    }

    /// Decode an inbound frame and append it, applying echo suppression.
    fn handle_inbound(&mut self, payload: &str) {
        match codec::decode(payload) {
            Ok(message) if message.sender_id == self.snapshot.user_id => {
                // The broker echoes our own transmission back; we already
                // appended it optimistically on send.
                self.snapshot.drops.suppressed_echoes += 1;
                tracing::debug!(sender_id = %message.sender_id, "suppressed echoed message");
            },
            Ok(message) => {
                self.snapshot.messages.push(message);
            },
            Err(error) => {
                self.snapshot.drops.decode_failures += 1;
                tracing::debug!(%error, "dropping undecodable frame");
            },
        }
    }
}
