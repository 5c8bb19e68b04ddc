//! # ItemsView
//!
//! The selectable list behind the items tab: the last fetched page of items,
//! a selection cursor, and the scroll offset of an 8-row viewport.
//!
//! ## Reconciliation
//!
//! When a refresh delivers a new list, the cursor stays where it was unless
//! the list got shorter than the cursor, in which case it moves to the new last
//! row. An empty list has no selection.
//!
//! ```text
//! before: [a, b, c, >d]     after delete: [a, b, >c]
//! before: [>a]              after delete: []          (selected = None)
//! ```

use crate::core::action::Effect;
use crate::core::key::Key;
use crate::core::widgets::Widget;
use crate::store::Item;

/// Rows visible at once; the list scrolls internally past this.
pub const VISIBLE_ROWS: usize = 8;

#[derive(Debug, Default)]
pub struct ItemsView {
    items: Vec<Item>,
    /// Cursor row; `None` exactly when `items` is empty
    selected: Option<usize>,
    /// First visible row
    offset: usize,
}

impl ItemsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Description of the selected row, used to look the item up in the store.
    /// `None` when the list is empty.
    pub fn selected_description(&self) -> Option<&str> {
        self.selected_item().map(|item| item.description.as_str())
    }

    /// Replace the list and reconcile the cursor against its new length.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.selected = match (self.selected, self.items.len()) {
            (_, 0) => None,
            (Some(cursor), len) => Some(cursor.min(len - 1)),
            (None, _) => Some(0),
        };
        self.scroll_to_selected();
    }

    /// Move the cursor to `index`, clamped to the list.
    pub fn select(&mut self, index: usize) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.selected = Some(index.min(last));
            self.scroll_to_selected();
        }
    }

    fn move_by(&mut self, delta: isize) {
        if let Some(cursor) = self.selected {
            self.select(cursor.saturating_add_signed(delta));
        }
    }

    /// Adjust the offset so the selected row is inside the viewport.
    fn scroll_to_selected(&mut self) {
        let Some(cursor) = self.selected else {
            self.offset = 0;
            return;
        };
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + VISIBLE_ROWS {
            self.offset = cursor + 1 - VISIBLE_ROWS;
        }
        let max_offset = self.items.len().saturating_sub(VISIBLE_ROWS);
        self.offset = self.offset.min(max_offset);
    }
}

impl Widget for ItemsView {
    fn handle_key(&mut self, key: &Key) -> Effect {
        match key {
            Key::Up => self.move_by(-1),
            Key::Down => self.move_by(1),
            Key::PageUp => self.move_by(-(VISIBLE_ROWS as isize)),
            Key::PageDown => self.move_by(VISIBLE_ROWS as isize),
            Key::Home => self.select(0),
            Key::End => self.select(usize::MAX),
            _ => {}
        }
        Effect::None
    }
}
