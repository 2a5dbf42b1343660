//! Observable session state.
//!
//! [`SessionSnapshot`] is the view model the UI renders from. The session
//! owner publishes a complete copy after every processed event, so readers
//! always observe a consistent whole and never a half-applied update.

use std::fmt;

use crate::message::ChatMessage;

/// Connection lifecycle projection.
///
/// Transitions are driven solely by transport events; the session never
/// invents a state on its own. `Closed` and `Failed` are terminal for a
/// session instance. Retry means constructing a new session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection attempt yet.
    #[default]
    NotStarted,
    /// Dialing the broker.
    Connecting,
    /// Connection established.
    Opened,
    /// Graceful shutdown in progress.
    Closing,
    /// Connection closed. Terminal.
    Closed,
    /// Connection failed to open or dropped. Terminal.
    Failed,
    /// The last transport event was an inbound message.
    ///
    /// A momentary tag rather than a steady state: the next transport event
    /// overwrites it.
    Received,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "not started",
            Self::Connecting => "connecting",
            Self::Opened => "opened",
            Self::Closing => "closing",
            Self::Closed => "closed",
            Self::Failed => "failed",
            Self::Received => "received",
        };
        f.write_str(label)
    }
}

/// Counters for frames that were silently dropped.
///
/// The broker protocol gives no way to surface these to the peer, but they
/// are observable locally so "nothing happened" is distinguishable from
/// "nothing arrived".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropStats {
    /// Inbound frames dropped because they failed to decode.
    pub decode_failures: u64,
    /// Inbound frames dropped because the sender was the local user (the
    /// broker echoes our own transmissions back).
    pub suppressed_echoes: u64,
}

/// Complete observable state of one chat session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Message history in strict insertion order. Append-only, never
    /// deduplicated, unbounded.
    pub messages: Vec<ChatMessage>,
    /// Local display name. Empty until the user picks one.
    pub user_id: String,
    /// In-progress, unsent message content.
    pub draft_text: String,
    /// Connection lifecycle projection.
    pub connection_state: ConnectionState,
    /// Silently dropped inbound frames.
    pub drops: DropStats,
}
