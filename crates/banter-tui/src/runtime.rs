//! Frontend event loop.
//!
//! Drives the terminal frontend: key presses go through the [`App`] state
//! machine and out to the [`SessionController`] as intents; snapshot changes
//! from the controller come back in through the watch channel. Every loop
//! iteration ends with a render.

use banter_client::SessionController;
use banter_core::SessionSnapshot;
use tokio::sync::watch;

use crate::{
    app::{App, AppCommand},
    terminal::{TerminalError, Tui},
};

/// Terminal frontend runtime.
pub struct Runtime {
    app: App,
    controller: SessionController,
    state: watch::Receiver<SessionSnapshot>,
    tui: Tui,
}

impl Runtime {
    /// Set up the terminal and bind to a running session.
    pub fn new(
        controller: SessionController,
        user_id: Option<String>,
    ) -> Result<Self, TerminalError> {
        let tui = Tui::new()?;
        let state = controller.subscribe();
        let mut app = App::new(user_id);
        app.apply_snapshot(state.borrow().clone());
        Ok(Self { app, controller, state, tui })
    }

    /// Run the event loop until the user quits or the terminal fails.
    pub async fn run(mut self) -> Result<(), TerminalError> {
        self.tui.render(&self.app)?;

        loop {
            tokio::select! {
                key = self.tui.next_key() => {
                    if let Some(key) = key? {
                        if self.dispatch_key(key).await {
                            return Ok(());
                        }
                    }
                },
                changed = self.state.changed() => {
                    // The session actor only goes away when the controller
                    // is dropped, which we own; treat it as shutdown.
                    if changed.is_err() {
                        return Ok(());
                    }
                    let snapshot = self.state.borrow_and_update().clone();
                    self.app.apply_snapshot(snapshot);
                },
            }

            self.tui.render(&self.app)?;
        }
    }

    /// Feed a key press through the app and execute the resulting commands.
    ///
    /// Returns `true` when the user asked to quit.
    async fn dispatch_key(&mut self, key: crate::input::KeyInput) -> bool {
        for command in self.app.handle_key(key) {
            match command {
                AppCommand::Quit => return true,
                AppCommand::SetUserId(user_id) => self.controller.set_user_id(user_id).await,
                AppCommand::DraftChange(text) => self.controller.draft_change(text).await,
                AppCommand::Send => self.controller.send().await,
            }
        }
        false
    }
}
