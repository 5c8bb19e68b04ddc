//! # Actions
//!
//! Everything that can happen in term-todo becomes an `Action`.
//! User presses Enter? That's `Action::Key(Key::Enter)`.
//! The store finished adding an item? That's `Action::ItemCreated`.
//!
//! The `update()` function takes the current state and an action, changes the
//! state, and returns an `Effect` describing the I/O to do next. No I/O
//! happens here; the driver performs the effect and feeds its completion back
//! in as the next action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//!                                               │
//!            Action (completion)  ←  driver  ←──┘
//! ```
//!
//! Typical chains:
//!
//! ```text
//! Key(Enter) on Account  → OpenAccount(name)  → AccountOpened → RefreshItems → ItemsFetched
//! Key(Enter) on Items    → ToggleItem(desc)   → ItemsChanged  → RefreshItems → ItemsFetched
//! Key(Delete) on Items   → DeleteItem(desc)   → ItemsChanged  → RefreshItems → ItemsFetched
//! Key(Enter) on NewItem  → CreateItem(desc)   → ItemCreated   → RefreshItems → ItemsFetched
//! ```

use log::debug;

use crate::core::key::Key;
use crate::core::state::{App, Tab};
use crate::store::Item;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Keyboard input from the adapter.
    Key(Key),
    /// The store for this account is open and migrated.
    AccountOpened(String),
    /// A toggle or delete has been applied (or skipped) in the store.
    ItemsChanged,
    /// A new item has been written to the store.
    ItemCreated,
    /// First page of items, freshly read from the store.
    ItemsFetched(Vec<Item>),
}

/// Side effects requested by `update`, performed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Open (creating if needed) the store for this account name.
    OpenAccount(String),
    /// Flip `done` on the item selected by this description.
    ToggleItem(String),
    /// Delete the item selected by this description.
    DeleteItem(String),
    /// Create a new, not-done item with this description.
    CreateItem(String),
    /// Re-read the first page of items.
    RefreshItems,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Key(key) => handle_key(app, key),
        Action::AccountOpened(name) => {
            debug!("Account '{name}' active");
            app.account = Some(name);
            Effect::RefreshItems
        }
        Action::ItemsChanged => Effect::RefreshItems,
        Action::ItemCreated => {
            app.description_input.reset();
            Effect::RefreshItems
        }
        Action::ItemsFetched(items) => {
            app.items.set_items(items);
            if app.expand_tabs() {
                debug!("Tabs expanded, items tab focused");
            }
            Effect::None
        }
    }
}

fn handle_key(app: &mut App, key: Key) -> Effect {
    match (&key, app.active()) {
        (Key::Quit, _) => Effect::Quit,
        (Key::Tab, _) => {
            app.next_tab();
            Effect::None
        }
        (Key::Enter, Tab::Account) => submit_account(app),
        (Key::Enter, Tab::Items) => app
            .items
            .selected_description()
            .map_or(Effect::None, |desc| Effect::ToggleItem(desc.to_string())),
        (Key::Delete | Key::Backspace, Tab::Items) => app
            .items
            .selected_description()
            .map_or(Effect::None, |desc| Effect::DeleteItem(desc.to_string())),
        (Key::Enter, Tab::NewItem) => {
            let description = app.description_input.value();
            if description.trim().is_empty() {
                Effect::None
            } else {
                Effect::CreateItem(description.to_string())
            }
        }
        _ => app.focused_widget_mut().handle_key(&key),
    }
}

/// The account can be chosen once per session; later submissions are ignored.
fn submit_account(app: &App) -> Effect {
    if app.account.is_some() {
        return Effect::None;
    }
    let name = app.account_input.value().trim();
    if name.is_empty() {
        return Effect::None;
    }
    Effect::OpenAccount(name.to_string())
}
