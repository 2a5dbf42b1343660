//! Terminal I/O.
//!
//! Owns the raw-mode/alternate-screen lifecycle, the crossterm event stream,
//! and the ratatui terminal. Rendering itself lives in [`crate::ui`].

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::{app::App, input::KeyInput, ui};

/// Terminal errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal handle: raw mode, alternate screen, events, rendering.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
}

impl Tui {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let _ = stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let events = EventStream::new();

        Ok(Self { terminal, events })
    }

    /// Wait for the next key press.
    ///
    /// Non-key events (resize, focus) return `Ok(None)`; the caller's render
    /// pass picks up the new dimensions.
    pub async fn next_key(&mut self) -> Result<Option<KeyInput>, TerminalError> {
        match self.events.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                Ok(Self::convert_key(key.code))
            },
            Some(Ok(_)) => Ok(None),
            Some(Err(e)) => Err(TerminalError::Io(e)),
            None => Err(TerminalError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "terminal event stream ended",
            ))),
        }
    }

    /// Draw the frontend state.
    pub fn render(&mut self, app: &App) -> Result<(), TerminalError> {
        let _ = self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
