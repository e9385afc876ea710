//! Editable single-line text field used by the chat composer and the admin prompt.

/// Upper bound for composed messages, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Upper bound for the admin code prompt, in characters.
pub const MAX_ADMIN_CODE_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    text: String,
    /// Cursor position as a character index.
    cursor: usize,
    max_len: usize,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::with_limit(MAX_MESSAGE_LENGTH)
    }
}

impl ComposerState {
    pub fn with_limit(max_len: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns false when the field is full and the char was dropped.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.char_count() >= self.max_len {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_at_cursor();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Empties the field and hands back what was typed.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte_index, _)| byte_index)
            .unwrap_or(self.text.len())
    }
}
