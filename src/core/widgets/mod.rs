//! # Widgets
//!
//! Per-tab input widgets. Each one owns its own state and handles the keys the
//! controller doesn't claim, through the single [`Widget`] contract:
//!
//! ```text
//! App::focused_widget_mut()  →  &mut dyn Widget  →  handle_key(&key)  →  Effect
//! ```
//!
//! Widgets are plain state machines with no knowledge of the terminal. Their
//! render wrappers live in `tui::components`.

pub mod items_view;
pub mod text_field;

pub use items_view::{ItemsView, VISIBLE_ROWS};
pub use text_field::TextField;

use crate::core::action::Effect;
use crate::core::key::Key;

/// A focusable component that reacts to keys forwarded by the controller.
pub trait Widget {
    /// Apply `key` to the widget's state and return any follow-up effect.
    fn handle_key(&mut self, key: &Key) -> Effect;
}
