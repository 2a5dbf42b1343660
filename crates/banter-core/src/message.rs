//! Chat message value type.

use serde::{Deserialize, Serialize};

/// A single chat message.
///
/// Immutable once constructed; equality is field equality. The broker gives
/// messages no identity beyond their content, so there is no timestamp and no
/// sequence number.
///
/// The serde field names match the broker's wire format
/// (`{"message": ..., "fromUserId": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message text.
    #[serde(rename = "message")]
    pub text: String,

    /// Display name of the sender.
    #[serde(rename = "fromUserId")]
    pub sender_id: String,
}

impl ChatMessage {
    /// Create a message from text and sender id.
    pub fn new(text: impl Into<String>, sender_id: impl Into<String>) -> Self {
        Self { text: text.into(), sender_id: sender_id.into() }
    }
}
