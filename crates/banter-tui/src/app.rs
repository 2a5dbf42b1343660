//! Frontend state machine.
//!
//! Pure state machine for the terminal frontend: it consumes key inputs and
//! session snapshots, and produces [`AppCommand`] instructions for the
//! runtime to execute. No I/O dependencies, fully testable without a
//! terminal or a network.

use banter_core::{ChatMessage, SessionSnapshot};

use crate::input::{InputState, KeyInput};

/// What the frontend is currently asking of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Prompting for a display name before the chat is usable.
    EnteringUserId,
    /// Normal chat view.
    Chatting,
}

/// Instructions produced by the frontend for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Forward the chosen display name to the session.
    SetUserId(String),
    /// Forward the edited draft to the session.
    DraftChange(String),
    /// Trigger a send of the current draft.
    Send,
    /// Quit the application.
    Quit,
}

/// Frontend state: mode, input buffer, and the latest session snapshot.
#[derive(Debug)]
pub struct App {
    mode: Mode,
    input: InputState,
    snapshot: SessionSnapshot,
    /// A send went out and the session will clear its draft shortly; mirror
    /// that clear into the local input buffer when it lands.
    awaiting_clear: bool,
}

impl App {
    /// Create the frontend state. With a preset display name the user-id
    /// prompt is skipped.
    pub fn new(user_id: Option<String>) -> Self {
        let mode = match user_id {
            Some(_) => Mode::Chatting,
            None => Mode::EnteringUserId,
        };
        Self {
            mode,
            input: InputState::new(),
            snapshot: SessionSnapshot::default(),
            awaiting_clear: false,
        }
    }

    /// Current frontend mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Input buffer state (draft text or the prompted user id).
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Latest session snapshot.
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// Whether a message was sent by the local user.
    pub fn is_own(&self, message: &ChatMessage) -> bool {
        message.sender_id == self.snapshot.user_id
    }

    /// Absorb a freshly published session snapshot.
    pub fn apply_snapshot(&mut self, snapshot: SessionSnapshot) {
        if self.awaiting_clear && snapshot.draft_text.is_empty() {
            self.input.clear();
            self.awaiting_clear = false;
        }
        self.snapshot = snapshot;
    }

    /// Process a key press and return commands for the runtime.
    pub fn handle_key(&mut self, key: KeyInput) -> Vec<AppCommand> {
        match self.mode {
            Mode::EnteringUserId => self.handle_prompt_key(key),
            Mode::Chatting => self.handle_chat_key(key),
        }
    }

    /// Keys while the user-id prompt is up: edit the name, Enter confirms.
    fn handle_prompt_key(&mut self, key: KeyInput) -> Vec<AppCommand> {
        match key {
            KeyInput::Esc => vec![AppCommand::Quit],
            KeyInput::Enter => {
                if self.input.buffer().is_empty() {
                    return vec![];
                }
                let user_id = self.input.take();
                self.mode = Mode::Chatting;
                vec![AppCommand::SetUserId(user_id)]
            },
            other => {
                let _ = self.input.apply(other);
                vec![]
            },
        }
    }

    /// Keys in the chat view: edit the draft, Enter sends.
    fn handle_chat_key(&mut self, key: KeyInput) -> Vec<AppCommand> {
        match key {
            KeyInput::Esc => vec![AppCommand::Quit],
            KeyInput::Enter => {
                if self.input.buffer().is_empty() {
                    return vec![];
                }
                // The buffer is not cleared here: the session resets its
                // draft after the fixed delay and the snapshot brings the
                // clear back to us.
                self.awaiting_clear = true;
                vec![AppCommand::Send]
            },
            other => {
                if self.input.apply(other) {
                    vec![AppCommand::DraftChange(self.input.buffer().to_owned())]
                } else {
                    vec![]
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use banter_core::{ChatMessage, SessionSnapshot};

    use super::{App, AppCommand, Mode};
    use crate::input::KeyInput;

    fn type_str(app: &mut App, text: &str) -> Vec<AppCommand> {
        let mut last = vec![];
        for c in text.chars() {
            last = app.handle_key(KeyInput::Char(c));
        }
        last
    }

    #[test]
    fn starts_in_prompt_mode_without_a_name() {
        assert_eq!(App::new(None).mode(), Mode::EnteringUserId);
        assert_eq!(App::new(Some("alice".into())).mode(), Mode::Chatting);
    }

    #[test]
    fn prompt_enter_confirms_the_name() {
        let mut app = App::new(None);
        let _ = type_str(&mut app, "alice");

        let commands = app.handle_key(KeyInput::Enter);

        assert_eq!(commands, vec![AppCommand::SetUserId("alice".into())]);
        assert_eq!(app.mode(), Mode::Chatting);
        assert!(app.input().buffer().is_empty());
    }

    #[test]
    fn prompt_rejects_empty_name() {
        let mut app = App::new(None);
        assert!(app.handle_key(KeyInput::Enter).is_empty());
        assert_eq!(app.mode(), Mode::EnteringUserId);
    }

    #[test]
    fn typing_in_chat_reports_the_full_draft() {
        let mut app = App::new(Some("alice".into()));

        let commands = type_str(&mut app, "hi");

        assert_eq!(commands, vec![AppCommand::DraftChange("hi".into())]);
    }

    #[test]
    fn cursor_moves_do_not_report_draft_changes() {
        let mut app = App::new(Some("alice".into()));
        let _ = type_str(&mut app, "hi");

        assert!(app.handle_key(KeyInput::Left).is_empty());
        assert!(app.handle_key(KeyInput::Home).is_empty());
    }

    #[test]
    fn enter_sends_and_waits_for_the_draft_clear() {
        let mut app = App::new(Some("alice".into()));
        let _ = type_str(&mut app, "hi");

        assert_eq!(app.handle_key(KeyInput::Enter), vec![AppCommand::Send]);
        // The buffer stays until the session's draft-clear comes back.
        assert_eq!(app.input().buffer(), "hi");

        app.apply_snapshot(SessionSnapshot::default());
        assert!(app.input().buffer().is_empty());
    }

    #[test]
    fn snapshot_without_pending_send_leaves_the_buffer_alone() {
        let mut app = App::new(Some("alice".into()));
        let _ = type_str(&mut app, "typing");

        app.apply_snapshot(SessionSnapshot::default());

        assert_eq!(app.input().buffer(), "typing");
    }

    #[test]
    fn enter_with_empty_draft_is_a_no_op() {
        let mut app = App::new(Some("alice".into()));
        assert!(app.handle_key(KeyInput::Enter).is_empty());
    }

    #[test]
    fn esc_quits_in_both_modes() {
        assert_eq!(App::new(None).handle_key(KeyInput::Esc), vec![AppCommand::Quit]);
        assert_eq!(
            App::new(Some("alice".into())).handle_key(KeyInput::Esc),
            vec![AppCommand::Quit]
        );
    }

    #[test]
    fn own_messages_are_detected_by_sender() {
        let mut app = App::new(Some("alice".into()));
        app.apply_snapshot(SessionSnapshot {
            user_id: "alice".into(),
            ..SessionSnapshot::default()
        });

        assert!(app.is_own(&ChatMessage::new("hi", "alice")));
        assert!(!app.is_own(&ChatMessage::new("hi", "bob")));
    }
}
