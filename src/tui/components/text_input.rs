//! # TextInput Component
//!
//! Render wrapper for a `core::widgets::TextField`: a `┃ ` prompt followed by
//! the buffer, or the dimmed placeholder while the buffer is empty.
//!
//! The field's `width` caps how many columns of text are shown. Longer values
//! scroll horizontally so the cursor stays in view; `visible_window` does the
//! column math and is kept pure so it can be tested without a terminal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::widgets::TextField;
use crate::tui::component::Component;

pub const PROMPT: &str = "┃ ";

pub struct TextInput<'a> {
    pub field: &'a TextField,
    /// Show the terminal cursor in this field
    pub focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(field: &'a TextField, focused: bool) -> Self {
        Self { field, focused }
    }
}

impl Component for TextInput<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prompt_width = PROMPT.width() as u16;
        let text_width = area
            .width
            .saturating_sub(prompt_width)
            .min(self.field.width) as usize;

        let prompt = Span::styled(PROMPT, Style::default().fg(Color::Magenta));
        let (body, cursor_col) = if self.field.is_empty() {
            let (placeholder, _) = visible_window(&self.field.placeholder, 0, text_width);
            (
                Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
                0,
            )
        } else {
            let (visible, col) =
                visible_window(self.field.value(), self.field.cursor(), text_width);
            (Span::raw(visible), col)
        };

        frame.render_widget(Paragraph::new(Line::from(vec![prompt, body])), area);

        if self.focused && area.height > 0 && text_width > 0 {
            let x = area.x + prompt_width + cursor_col as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
        }
    }
}

/// The slice of `value` that fits in `width` columns with the cursor visible,
/// plus the cursor's column within that slice.
///
/// `cursor` is a byte offset into `value`. Characters are dropped from the
/// left until the cursor column is strictly less than `width`, leaving room to
/// draw the cursor after the last character.
pub fn visible_window(value: &str, cursor: usize, width: usize) -> (&str, usize) {
    if width == 0 {
        return ("", 0);
    }
    let before = value.get(..cursor).unwrap_or(value);

    let mut start = 0;
    let mut cursor_col = before.width();
    for (idx, c) in before.char_indices() {
        if cursor_col < width {
            break;
        }
        start = idx + c.len_utf8();
        cursor_col -= c.width().unwrap_or(0);
    }

    let mut end = start;
    let mut used = 0;
    for (idx, c) in value[start..].char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        end = start + idx + c.len_utf8();
    }

    (&value[start..end], cursor_col)
}
