//! Session events and actions.

use std::time::Duration;

/// Lifecycle events reported by the websocket transport.
///
/// This is the closed set of things a transport can tell the session. The
/// session dispatches on it exhaustively, so adding a variant forces every
/// handler to account for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Connection established.
    Opened,

    /// Peer started a graceful shutdown.
    Closing,

    /// Connection fully closed.
    Closed,

    /// Connection failed to open or dropped.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },

    /// Text frame arrived from the broker.
    MessageReceived {
        /// Raw wire payload, not yet decoded.
        payload: String,
    },
}

/// Inputs processed by the [`crate::Session`] state machine.
///
/// Events originate from two sources: user intents reported by the UI, and
/// lifecycle events from the transport. `DraftClearElapsed` is fed back by
/// the driver when the draft-clear timer it was asked to schedule fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// User triggered a send of the current draft.
    Send,

    /// User picked a display name. No validation; may be empty or duplicated
    /// across clients.
    SetUserId {
        /// The chosen display name.
        user_id: String,
    },

    /// User edited the draft text.
    DraftChange {
        /// Full new draft content.
        text: String,
    },

    /// Transport lifecycle event.
    Transport(TransportEvent),

    /// The scheduled draft-clear delay elapsed.
    DraftClearElapsed,
}

/// Instructions produced by the session for the driver to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Transmit an encoded payload over the open connection. Fire-and-forget;
    /// the broker does not confirm delivery.
    Transmit {
        /// Wire text frame to send.
        payload: String,
    },

    /// Schedule a [`SessionEvent::DraftClearElapsed`] after the delay. A new
    /// schedule replaces any pending one, and the timer must not outlive the
    /// session.
    ClearDraftAfter {
        /// How long to wait before clearing the draft.
        delay: Duration,
    },
}
