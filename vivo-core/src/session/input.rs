//! Pending-text editing
//!
//! Cursor positions are character indices so editing never splits a
//! multi-byte character.

/// Holds the text the user is composing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputController {
    pending: String,
    cursor: usize,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.pending
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// True when there is nothing worth sending.
    pub fn is_blank(&self) -> bool {
        self.pending.trim().is_empty()
    }

    /// Replace the pending text and move the cursor to its end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.pending = text.into();
        self.cursor = self.char_len();
    }

    /// Get the pending text and clear it
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.cursor = 0;
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.pending.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.pending.remove(at);
        self.cursor -= 1;
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.pending.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Text is a slash command rather than a question.
    pub fn is_command(&self) -> bool {
        self.pending.starts_with('/')
    }

    fn char_len(&self) -> usize {
        self.pending.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.pending
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.pending.len())
    }
}
