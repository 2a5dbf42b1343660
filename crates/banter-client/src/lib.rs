//! Client
//!
//! Tokio-side half of the Banter chat client: the websocket transport and
//! the controller actor that drives the sans-IO [`banter_core::Session`].
//!
//! # Architecture
//!
//! - [`transport::connect`] opens one websocket to the broker and bridges it
//!   to channels of [`banter_core::TransportEvent`] and outbound payloads.
//! - [`SessionController`] owns the session inside a single actor task. User
//!   intents and transport events are serialized through one queue, and a
//!   complete [`banter_core::SessionSnapshot`] is published over a watch
//!   channel after every processed event.
//!
//! Dropping the controller handle tears everything down: the actor aborts,
//! which drops the transport handle, which aborts the connection task.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod controller;
pub mod transport;

pub use config::{BrokerConfig, DEFAULT_ENDPOINT};
pub use controller::SessionController;
pub use transport::ConnectedBroker;
