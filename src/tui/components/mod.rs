//! # TUI Components
//!
//! Render-only building blocks for the terminal interface.
//!
//! ## Component Architecture
//!
//! All state lives in `core` (`App`, `TextField`, `ItemsView`). Components
//! here are transient wrappers created each frame with borrowed props, so
//! nothing needs to be synchronized between the core and the adapter:
//!
//! ```rust,ignore
//! TextInput::new(&app.account_input, focused).render(frame, area);
//! ItemsTable::new(&app.items).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── tab_bar.rs       (Account | @TODO | New @TODO)
//! ├── text_input.rs    (prompt + buffer/placeholder, horizontal scroll)
//! └── items_table.rs   (Done/@TODO table with help lines)
//! ```

pub mod items_table;
pub mod tab_bar;
pub mod text_input;

pub use items_table::ItemsTable;
pub use tab_bar::TabBar;
pub use text_input::TextInput;
