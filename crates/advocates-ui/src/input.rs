//! Single-line editable search box.

use crossterm::event::{KeyCode, KeyModifiers};

/// What a key did to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not an editing key
    Ignored,
    /// Cursor moved, text unchanged
    Moved,
    /// Text changed
    Edited,
}

/// Search box text plus a byte-offset cursor that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole text and park the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.set(String::new());
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.prev_boundary();
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    pub fn delete_char_at(&mut self) -> bool {
        let end = self.next_boundary();
        if end == self.cursor {
            return false;
        }
        self.text.drain(self.cursor..end);
        true
    }

    /// Delete back to the start of the previous whitespace-separated word.
    pub fn delete_word_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let head = &self.text[..self.cursor];
        let word_end = head.trim_end().len();
        let start = head[..word_end]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyOutcome {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        let alt = modifiers.contains(KeyModifiers::ALT);

        let edited = match code {
            KeyCode::Char('u') if ctrl => {
                let had_text = !self.text.is_empty();
                self.clear();
                had_text
            }
            KeyCode::Char('w') if ctrl => self.delete_word_before(),
            KeyCode::Backspace if alt => self.delete_word_before(),
            KeyCode::Backspace => self.delete_char_before(),
            KeyCode::Delete => self.delete_char_at(),
            KeyCode::Char(c) if !ctrl && !alt => {
                self.insert_char(c);
                true
            }
            KeyCode::Left => {
                self.move_left();
                return KeyOutcome::Moved;
            }
            KeyCode::Right => {
                self.move_right();
                return KeyOutcome::Moved;
            }
            KeyCode::Home => {
                self.cursor = 0;
                return KeyOutcome::Moved;
            }
            KeyCode::End => {
                self.cursor = self.text.len();
                return KeyOutcome::Moved;
            }
            _ => return KeyOutcome::Ignored,
        };

        if edited {
            KeyOutcome::Edited
        } else {
            KeyOutcome::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in s.chars() {
            input.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        input
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = typed("anxx");
        assert_eq!(
            input.handle_key(KeyCode::Backspace, KeyModifiers::NONE),
            KeyOutcome::Edited
        );
        assert_eq!(input.text(), "anx");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_multibyte_cursor_moves() {
        let mut input = typed("café");
        input.move_left();
        assert_eq!(input.cursor(), 3);
        input.insert_char('x');
        assert_eq!(input.text(), "cafxé");
        input.move_right();
        assert!(input.delete_char_before());
        assert_eq!(input.text(), "cafx");
    }

    #[test]
    fn test_delete_word_keeps_earlier_words() {
        let mut input = typed("san antonio  ");
        assert_eq!(
            input.handle_key(KeyCode::Char('w'), KeyModifiers::CONTROL),
            KeyOutcome::Edited
        );
        assert_eq!(input.text(), "san ");
    }

    #[test]
    fn test_navigation_is_not_an_edit() {
        let mut input = typed("ab");
        assert_eq!(
            input.handle_key(KeyCode::Home, KeyModifiers::NONE),
            KeyOutcome::Moved
        );
        assert_eq!(
            input.handle_key(KeyCode::Backspace, KeyModifiers::NONE),
            KeyOutcome::Moved
        );
        assert_eq!(
            input.handle_key(KeyCode::Up, KeyModifiers::NONE),
            KeyOutcome::Ignored
        );
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_set_puts_cursor_at_end() {
        let mut input = typed("zzz");
        input.set("Trauma & PTSD");
        assert_eq!(input.cursor(), "Trauma & PTSD".len());
    }
}
