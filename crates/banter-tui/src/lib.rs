//! Terminal UI for Banter
//!
//! A thin terminal shell over [`banter_client::SessionController`]. The
//! frontend keeps its own small state machine ([`app::App`]) for input
//! editing and the user-id prompt, renders the published session snapshots
//! with ratatui, and forwards user intents to the controller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod app;
pub mod input;
pub mod runtime;
pub mod terminal;
pub mod ui;

pub use app::{App, AppCommand, Mode};
pub use input::{InputState, KeyInput};
pub use runtime::Runtime;
pub use terminal::{TerminalError, Tui};
