//! # Keys
//!
//! UI-agnostic keyboard input. The terminal adapter translates raw terminal
//! events into `Key` values; everything in `core` only ever sees these.

/// A single keyboard input, already decoded by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Printable character typed by the user.
    Char(char),
    /// Bracketed paste.
    Paste(String),
    Enter,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Ctrl+C.
    Quit,
}
