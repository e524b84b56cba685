use crate::input::Key;

/// Horizontal gap between a text box's left edge and its text.
pub const TEXT_INSET: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretOutcome {
    Ignored,
    Moved,
    Edited,
}

/// Insertion point of a text box, counted in characters.
///
/// The stored position may go stale when the text is replaced from the
/// outside, so every read clamps it to the current length first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caret {
    position: usize,
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the `char_pos`-th character, or `text.len()` past the end.
fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

impl Caret {
    pub fn position(&self, text: &str) -> usize {
        self.position.min(char_len(text))
    }

    pub fn set(&mut self, position: usize, text: &str) {
        self.position = position.min(char_len(text));
    }

    pub fn insert(&mut self, text: &mut String, input: &str) {
        let pos = self.position(text);
        text.insert_str(byte_index(text, pos), input);
        self.position = pos + char_len(input);
    }

    pub fn move_left(&mut self, text: &str) {
        self.position = self.position(text).saturating_sub(1);
    }

    pub fn move_right(&mut self, text: &str) {
        self.position = (self.position(text) + 1).min(char_len(text));
    }

    pub fn home(&mut self) {
        self.position = 0;
    }

    pub fn end(&mut self, text: &str) {
        self.position = char_len(text);
    }

    /// Removes the character after the caret.
    pub fn delete(&mut self, text: &mut String) -> bool {
        let pos = self.position(text);
        if pos >= char_len(text) {
            return false;
        }
        text.remove(byte_index(text, pos));
        self.position = pos;
        true
    }

    /// Removes the character before the caret.
    pub fn backspace(&mut self, text: &mut String) -> bool {
        let pos = self.position(text);
        if pos == 0 {
            return false;
        }
        text.remove(byte_index(text, pos - 1));
        self.position = pos - 1;
        true
    }

    pub fn apply_key(&mut self, text: &mut String, key: Key) -> CaretOutcome {
        match key {
            Key::Left => self.move_left(text),
            Key::Right => self.move_right(text),
            Key::Home => self.home(),
            Key::End => self.end(text),
            Key::Delete => {
                return if self.delete(text) { CaretOutcome::Edited } else { CaretOutcome::Ignored };
            }
            Key::Backspace => {
                return if self.backspace(text) { CaretOutcome::Edited } else { CaretOutcome::Ignored };
            }
            _ => return CaretOutcome::Ignored,
        }
        CaretOutcome::Moved
    }

    /// Click mapping. `offset` is the click distance from the text start and
    /// `rendered_width` the width of the whole text. Only clicks past the end
    /// of the text move the caret.
    pub fn place(&mut self, offset: i32, rendered_width: i32, text: &str) -> bool {
        if offset >= rendered_width {
            self.end(text);
            return true;
        }
        false
    }
}
