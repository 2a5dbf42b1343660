//! Core
//!
//! Sans-IO session logic for the Banter chat client. Manages the lifecycle
//! projection of one broker connection, the append-only message history, and
//! the JSON wire codec.
//!
//! # Architecture
//!
//! The crate follows an action-based pattern: the caller feeds events
//! ([`SessionEvent`]) into the [`Session`] state machine, which mutates its
//! observable snapshot and returns actions ([`SessionAction`]) for the caller
//! to execute. No I/O happens here, which keeps every behavior directly
//! testable.
//!
//! # Components
//!
//! - [`Session`]: state machine owning the UI-facing snapshot
//! - [`codec`]: two-field JSON wire mapping for [`ChatMessage`]
//! - [`SessionEvent`] / [`SessionAction`]: inputs and outputs of the machine
//! - [`TransportEvent`]: closed set of websocket lifecycle events

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
mod event;
mod message;
mod session;
mod state;

pub use codec::DecodeError;
pub use event::{SessionAction, SessionEvent, TransportEvent};
pub use message::ChatMessage;
pub use session::{DRAFT_CLEAR_DELAY, Session};
pub use state::{ConnectionState, DropStats, SessionSnapshot};
