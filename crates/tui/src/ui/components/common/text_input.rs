//! UTF-8 safe text buffer with cursor management.
//!
//! Holds the editing primitives the unit field stages its uncommitted text
//! in. The buffer performs no filtering; callers decide what gets inserted.

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
        }
    }

    // ----- Getters -----
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // ----- Setters -----

    /// Replace the buffer and park the cursor at the end.
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        let mut cursor = cursor.min(self.input.len());
        while !self.input.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    // ----- Editing primitives (UTF-8 safe) -----

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_len = self.input[..self.cursor].chars().last().map_or(1, char::len_utf8);
        self.cursor = self.cursor.saturating_sub(prev_len);
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor = self.cursor.saturating_add(next.len_utf8());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor.
    pub fn insert_str(&mut self, s: &str) {
        self.input.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Backspace the char immediately before the cursor.
    /// Returns `false` when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.input[..self.cursor].chars().last().map_or(1, char::len_utf8);
        let start = self.cursor - prev;
        self.input.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Delete the char under the cursor.
    /// Returns `false` when the cursor is at the end of the buffer.
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.input[self.cursor..].chars().next() else {
            return false;
        };
        self.input.drain(self.cursor..self.cursor + next.len_utf8());
        true
    }
}
