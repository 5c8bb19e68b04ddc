//! # TextField
//!
//! Single-line text input with a character limit.
//!
//! ## State
//!
//! - `buffer`: current text, never longer than `char_limit` characters
//! - `cursor`: byte offset into `buffer`, always on a char boundary
//!
//! `placeholder` and `width` are display props read by the render wrapper.

use crate::core::action::Effect;
use crate::core::key::Key;
use crate::core::widgets::Widget;

pub struct TextField {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    char_limit: usize,
    /// Shown dimmed while the buffer is empty
    pub placeholder: String,
    /// Visible columns (text scrolls horizontally past this)
    pub width: u16,
}

impl TextField {
    pub fn new(char_limit: usize) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            char_limit,
            placeholder: String::new(),
            width: char_limit.min(u16::MAX as usize) as u16,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Cursor byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer (used after the add form is submitted).
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Insert at the cursor as much of `text` as fits. Control characters
    /// (including newlines from a paste) are dropped.
    fn insert(&mut self, text: &str) -> bool {
        let room = self.char_limit.saturating_sub(self.buffer.chars().count());
        let accepted: String = text.chars().filter(|c| !c.is_control()).take(room).collect();
        if accepted.is_empty() {
            return false;
        }
        self.buffer.insert_str(self.cursor, &accepted);
        self.cursor += accepted.len();
        true
    }
}

impl Widget for TextField {
    fn handle_key(&mut self, key: &Key) -> Effect {
        match key {
            Key::Char(c) => {
                self.insert(c.encode_utf8(&mut [0; 4]));
            }
            Key::Paste(text) => {
                self.insert(text);
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            Key::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
            }
            Key::Left => self.cursor = prev_char_boundary(&self.buffer, self.cursor),
            Key::Right => self.cursor = next_char_boundary(&self.buffer, self.cursor),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.buffer.len(),
            _ => {}
        }
        Effect::None
    }
}

/// Byte offset of the char boundary before `pos` (0 at the start).
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

/// Byte offset of the char boundary after `pos` (`s.len()` at the end).
fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(s.len(), |c| pos + c.len_utf8())
}
