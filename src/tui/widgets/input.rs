//! Text input widget
//!
//! A single-line text field with cursor support, used by the income editor
//! and the category/transaction forms.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in bytes (inputs here are ASCII-oriented amounts
    /// and names; multi-byte chars are appended at the end)
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text shown while empty
    pub placeholder: String,
}

impl TextInput {
    /// Create an empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left one character
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor -= prev;
        }
    }

    /// Move cursor right one character
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.content[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            self.cursor += next;
        }
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text, style) = if self.content.is_empty() && !self.focused {
            (
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (
                self.content.as_str(),
                Style::default().fg(if self.focused {
                    Color::White
                } else {
                    Color::Gray
                }),
            )
        };

        buf.set_string(area.x, area.y, text, style);

        if self.focused {
            let cursor_col = self.content[..self.cursor].chars().count() as u16;
            let cursor_x = area.x + cursor_col;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content[self.cursor..].chars().next().unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('4');
        input.insert('0');
        input.insert('0');
        assert_eq!(input.value(), "400");

        input.backspace();
        assert_eq!(input.value(), "40");
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = TextInput::new().content("abc");
        assert_eq!(input.cursor, 3);

        input.move_left();
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "axbc");

        input.move_right();
        input.insert('y');
        assert_eq!(input.value(), "axbyc");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new().content("a");
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "a");
    }
}
