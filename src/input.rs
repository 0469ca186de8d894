//! Text input field with cursor handling and a character limit.

/// A text input field with cursor position and an optional character limit.
///
/// The cursor counts characters, not bytes. Any edit that would push the value
/// past `limit` characters is rejected and leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    cursor: usize,
    limit: Option<usize>,
}

impl InputField {
    /// Create a new empty input field without a limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty input field that accepts at most `limit` characters.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// An input field without a limit, pre-filled with `value`.
    pub fn filled(value: &str) -> Self {
        let mut field = Self::new();
        field.set_value(value);
        field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn fits(&self, chars: usize) -> bool {
        self.limit.map_or(true, |max| chars <= max)
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Replace the whole value, moving the cursor to the end.
    ///
    /// Returns false, leaving the field untouched, if `value` exceeds the limit.
    pub fn set_value(&mut self, value: &str) -> bool {
        let chars = value.chars().count();
        if !self.fits(chars) {
            return false;
        }
        self.value = value.to_string();
        self.cursor = chars;
        true
    }

    /// Insert a character at the cursor. Returns false if the limit is reached.
    pub fn handle_char(&mut self, c: char) -> bool {
        if !self.fits(self.len() + 1) {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_rejects_extra_chars() {
        let mut f = InputField::with_limit(3);
        assert!(f.handle_char('a'));
        assert!(f.handle_char('b'));
        assert!(f.handle_char('c'));
        assert!(!f.handle_char('d'));
        assert_eq!(f.value(), "abc");
        assert!(!f.set_value("abcd"));
        assert_eq!(f.value(), "abc");
    }

    #[test]
    fn test_editing_multibyte_text() {
        let mut f = InputField::new();
        assert!(f.set_value("héllo"));
        f.move_cursor_left();
        f.move_cursor_left();
        f.move_cursor_left();
        f.handle_backspace();
        assert_eq!(f.value(), "hllo");
        f.handle_delete();
        assert_eq!(f.value(), "hlo");
        assert!(f.handle_char('é'));
        assert_eq!(f.value(), "héo");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_filled_ignores_limits() {
        let f = InputField::filled(&"x".repeat(500));
        assert_eq!(f.value().len(), 500);
        assert_eq!(f.cursor(), 500);
    }
}
