//! Input buffer state and key abstraction.
//!
//! This module owns the text input buffer and cursor. Keeping the key type
//! decoupled from crossterm keeps the app state machine testable without a
//! terminal.

/// Key input events from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Character input.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// Text input buffer with cursor.
#[derive(Debug, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Take the buffer contents and reset the cursor.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    /// Clear the buffer and reset the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Apply an editing key to the buffer.
    ///
    /// Returns `true` when the buffer content changed (cursor-only moves
    /// return `false`). Enter and Esc are not editing keys and are ignored
    /// here.
    pub fn apply(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor = self.cursor.saturating_add(1);
                true
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    let at = self.byte_offset(self.cursor);
                    let _ = self.buffer.remove(at);
                    true
                } else {
                    false
                }
            },
            KeyInput::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_offset(self.cursor);
                    let _ = self.buffer.remove(at);
                    true
                } else {
                    false
                }
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            },
            KeyInput::Right => {
                if self.cursor < self.char_count() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                false
            },
            KeyInput::Home => {
                self.cursor = 0;
                false
            },
            KeyInput::End => {
                self.cursor = self.char_count();
                false
            },
            KeyInput::Enter | KeyInput::Esc => false,
        }
    }

    /// Number of characters in the buffer.
    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Byte offset of the character at `cursor`, or the buffer end.
    ///
    /// The cursor counts characters, but `String` edits take byte indices;
    /// mixing the two panics off a char boundary on multi-byte input.
    fn byte_offset(&self, cursor: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(cursor)
            .map_or(self.buffer.len(), |(at, _)| at)
    }
}

#[cfg(test)]
mod tests {
    use super::{InputState, KeyInput};

    #[test]
    fn char_input_adds_to_buffer() {
        let mut input = InputState::new();

        assert!(input.apply(KeyInput::Char('h')));
        assert!(input.apply(KeyInput::Char('i')));

        assert_eq!(input.buffer(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_char() {
        let mut input = InputState::new();

        let _ = input.apply(KeyInput::Char('a'));
        let _ = input.apply(KeyInput::Char('b'));
        assert!(input.apply(KeyInput::Backspace));

        assert_eq!(input.buffer(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut input = InputState::new();
        assert!(!input.apply(KeyInput::Backspace));
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn take_clears_buffer() {
        let mut input = InputState::new();

        let _ = input.apply(KeyInput::Char('h'));
        let _ = input.apply(KeyInput::Char('i'));

        assert_eq!(input.take(), "hi");
        assert!(input.buffer().is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn cursor_movement() {
        let mut input = InputState::new();

        let _ = input.apply(KeyInput::Char('a'));
        let _ = input.apply(KeyInput::Char('b'));
        let _ = input.apply(KeyInput::Char('c'));

        assert!(!input.apply(KeyInput::Home));
        assert_eq!(input.cursor(), 0);

        let _ = input.apply(KeyInput::End);
        assert_eq!(input.cursor(), 3);

        let _ = input.apply(KeyInput::Left);
        assert_eq!(input.cursor(), 2);

        let _ = input.apply(KeyInput::Right);
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn multibyte_chars_edit_without_panicking() {
        let mut input = InputState::new();

        assert!(input.apply(KeyInput::Char('é')));
        assert!(input.apply(KeyInput::Char('a')));
        assert_eq!(input.buffer(), "éa");
        assert_eq!(input.cursor(), 2);

        // Insert between the two: cursor counts characters, not bytes.
        let _ = input.apply(KeyInput::Left);
        assert!(input.apply(KeyInput::Char('猫')));
        assert_eq!(input.buffer(), "é猫a");
        assert_eq!(input.cursor(), 2);

        assert!(input.apply(KeyInput::Backspace));
        assert_eq!(input.buffer(), "éa");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn end_and_delete_use_character_positions() {
        let mut input = InputState::new();

        let _ = input.apply(KeyInput::Char('🦀'));
        let _ = input.apply(KeyInput::Char('b'));

        let _ = input.apply(KeyInput::End);
        assert_eq!(input.cursor(), 2);

        let _ = input.apply(KeyInput::Home);
        assert!(input.apply(KeyInput::Delete));
        assert_eq!(input.buffer(), "b");

        // Delete past the end is a no-op.
        let _ = input.apply(KeyInput::End);
        assert!(!input.apply(KeyInput::Delete));
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = InputState::new();

        let _ = input.apply(KeyInput::Char('a'));
        let _ = input.apply(KeyInput::Char('c'));
        let _ = input.apply(KeyInput::Left);
        let _ = input.apply(KeyInput::Char('b'));

        assert_eq!(input.buffer(), "abc");
    }
}
