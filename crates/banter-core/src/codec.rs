//! JSON wire codec for chat messages.
//!
//! The broker relays flat two-field JSON text frames:
//!
//! ```text
//! {"message":"hello","fromUserId":"alice"}
//! ```
//!
//! Both fields are required strings. Unknown fields are ignored on decode.
//! There is no versioning, compression, or binary framing.

use thiserror::Error;

use crate::message::ChatMessage;

/// Errors produced when an inbound frame cannot be decoded.
///
/// Callers drop the frame on error; a decode failure never yields a
/// partially-populated message and is never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload is not well-formed JSON.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// Payload is valid JSON but a required field is absent, `null`, or has
    /// the wrong type.
    #[error("missing or invalid field: {0}")]
    Field(String),
}

/// Encode a message into its wire text frame.
pub fn encode(message: &ChatMessage) -> String {
    serde_json::json!({
        "message": message.text,
        "fromUserId": message.sender_id,
    })
    .to_string()
}

/// Decode a wire text frame into a message.
pub fn decode(payload: &str) -> Result<ChatMessage, DecodeError> {
    serde_json::from_str(payload).map_err(|e| match e.classify() {
        serde_json::error::Category::Data => DecodeError::Field(e.to_string()),
        _ => DecodeError::Malformed(e.to_string()),
    })
}
