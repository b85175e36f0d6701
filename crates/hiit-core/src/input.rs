//! Single-line text buffer used by rename and duration prompts.

/// Which characters a prompt accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Digits and a leading minus sign only.
    Numeric,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
    kind: InputKind,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn numeric() -> Self {
        Self {
            kind: InputKind::Numeric,
            ..Self::default()
        }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            InputKind::Text => !c.is_control(),
            InputKind::Numeric => c.is_ascii_digit() || (c == '-' && self.cursor == 0),
        }
    }

    /// Returns false when the character was rejected for this input kind.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        let offset = self.byte_offset(self.cursor);
        self.buffer.insert(offset, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset(self.cursor);
        self.buffer.remove(offset);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let offset = self.byte_offset(self.cursor);
            self.buffer.remove(offset);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.char_len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }
}
