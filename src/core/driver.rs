//! # Driver
//!
//! Runs the `update` → `Effect` → completion loop against the account's store.
//!
//! The driver is the only owner of the store handle. `dispatch` handles one
//! incoming action to completion: it performs each effect synchronously and
//! feeds the resulting action straight back into `update`, so a store write is
//! always visible to the refresh that follows it.
//!
//! Failure policy: failing to open the account's store is fatal and returned
//! to the caller. Every other store failure is logged and absorbed. A failed
//! refresh re-delivers the rows already on screen.

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::store::{Item, ItemStore, StoreError, StoreOpener};

/// Whether the interaction loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Driver {
    pub app: App,
    store: Option<Box<dyn ItemStore>>,
    open_store: StoreOpener,
}

impl Driver {
    pub fn new(open_store: StoreOpener) -> Self {
        Self {
            app: App::new(),
            store: None,
            open_store,
        }
    }

    /// The open account store, once an account has been submitted.
    pub fn store(&self) -> Option<&dyn ItemStore> {
        self.store.as_deref()
    }

    /// Process one action and every follow-up it triggers.
    pub fn dispatch(&mut self, action: Action) -> Result<Flow, StoreError> {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            let effect = update(&mut self.app, action);
            if effect == Effect::Quit {
                info!("Quit requested");
                return Ok(Flow::Quit);
            }
            next = self.perform(effect)?;
        }
        Ok(Flow::Continue)
    }

    /// Perform one effect and return the action reporting its completion.
    fn perform(&mut self, effect: Effect) -> Result<Option<Action>, StoreError> {
        if effect != Effect::None {
            debug!("Performing {effect:?}");
        }
        match effect {
            Effect::None | Effect::Quit => Ok(None),
            Effect::OpenAccount(name) => {
                let store = (self.open_store)(&name)?;
                info!("Account '{name}' opened");
                self.store = Some(store);
                Ok(Some(Action::AccountOpened(name)))
            }
            Effect::ToggleItem(description) => {
                if let Some(store) = self.store() {
                    toggle_item(store, &description);
                }
                Ok(Some(Action::ItemsChanged))
            }
            Effect::DeleteItem(description) => {
                if let Some(store) = self.store() {
                    delete_item(store, &description);
                }
                Ok(Some(Action::ItemsChanged))
            }
            Effect::CreateItem(description) => {
                let Some(store) = self.store() else {
                    return Ok(None);
                };
                let mut item = Item::new(description);
                match store.create(&mut item) {
                    Ok(_) => Ok(Some(Action::ItemCreated)),
                    Err(e) => {
                        warn!("Failed to add item '{}': {e}", item.description);
                        Ok(None)
                    }
                }
            }
            Effect::RefreshItems => {
                let Some(store) = self.store() else {
                    return Ok(None);
                };
                match store.list(1) {
                    Ok(items) => {
                        debug!("Fetched {} items", items.len());
                        Ok(Some(Action::ItemsFetched(items)))
                    }
                    Err(e) => {
                        // Still complete the refresh so the first one after
                        // login expands the tabs; the view keeps its rows
                        warn!("Failed to list items: {e}");
                        let previous = self.app.items.items().to_vec();
                        Ok(Some(Action::ItemsFetched(previous)))
                    }
                }
            }
        }
    }
}

/// Map a selected row to its store record.
///
/// Rows are identified by description and the first match wins, so duplicate
/// descriptions always resolve to the oldest item. Any failure means there is
/// nothing to act on.
pub fn resolve_selected(store: &dyn ItemStore, description: &str) -> Option<Item> {
    match store.find(description) {
        Ok(item) => Some(item),
        Err(StoreError::NotFound) => {
            debug!("No item matches '{description}'");
            None
        }
        Err(e) => {
            warn!("Lookup of '{description}' failed: {e}");
            None
        }
    }
}

fn toggle_item(store: &dyn ItemStore, description: &str) {
    let Some(mut item) = resolve_selected(store, description) else {
        return;
    };
    item.done = !item.done;
    if let Err(e) = store.update(&item) {
        warn!("Failed to toggle '{description}': {e}");
    }
}

fn delete_item(store: &dyn ItemStore, description: &str) {
    let Some(item) = resolve_selected(store, description) else {
        return;
    };
    if let Err(e) = store.delete(&item) {
        warn!("Failed to delete '{description}': {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::Key;
    use crate::core::state::Tab;
    use crate::test_support::{failing_driver, faulty_driver, memory_driver, press, type_text};

    fn rows(driver: &Driver) -> Vec<(String, String)> {
        driver
            .app
            .items
            .items()
            .iter()
            .map(|item| (item.done_label().to_string(), item.description.clone()))
            .collect()
    }

    fn row(done: &str, description: &str) -> (String, String) {
        (done.to_string(), description.to_string())
    }

    /// Submit `name` on the account tab.
    fn login(driver: &mut Driver, name: &str) {
        type_text(driver, name);
        assert_eq!(press(driver, Key::Enter), Flow::Continue);
    }

    /// Switch to the add tab, submit `description`, and return to the items tab.
    fn add_item(driver: &mut Driver, description: &str) {
        while driver.app.active() != Tab::NewItem {
            press(driver, Key::Tab);
        }
        type_text(driver, description);
        press(driver, Key::Enter);
        while driver.app.active() != Tab::Items {
            press(driver, Key::Tab);
        }
    }

    #[test]
    fn test_login_expands_tabs_and_opens_store() {
        let mut driver = memory_driver();
        login(&mut driver, "alice");

        assert_eq!(driver.app.account.as_deref(), Some("alice"));
        assert_eq!(driver.app.tabs().len(), 3);
        assert_eq!(driver.app.active(), Tab::Items);
        assert!(driver.store().is_some());
        assert!(driver.app.items.is_empty());
    }

    #[test]
    fn test_end_to_end_add_toggle_delete() {
        let mut driver = memory_driver();
        login(&mut driver, "alice");

        add_item(&mut driver, "Buy milk");
        assert_eq!(rows(&driver), [row("no", "Buy milk")]);
        assert!(driver.app.description_input.is_empty());

        press(&mut driver, Key::Enter);
        assert_eq!(rows(&driver), [row("yes", "Buy milk")]);

        press(&mut driver, Key::Delete);
        assert!(rows(&driver).is_empty());
        assert_eq!(driver.app.items.selected(), None);
    }

    #[test]
    fn test_add_keeps_focus_on_add_tab() {
        let mut driver = memory_driver();
        login(&mut driver, "alice");
        press(&mut driver, Key::Tab);
        type_text(&mut driver, "Buy milk");
        press(&mut driver, Key::Enter);

        assert_eq!(driver.app.active(), Tab::NewItem);
        assert_eq!(driver.app.items.len(), 1);
    }

    #[test]
    fn test_toggle_and_delete_on_empty_list() {
        let mut driver = memory_driver();
        login(&mut driver, "alice");

        assert_eq!(press(&mut driver, Key::Enter), Flow::Continue);
        assert_eq!(press(&mut driver, Key::Delete), Flow::Continue);
        assert_eq!(press(&mut driver, Key::Backspace), Flow::Continue);
        assert!(driver.app.items.is_empty());
    }

    #[test]
    fn test_toggle_missing_item_is_absorbed() {
        let mut driver = memory_driver();
        login(&mut driver, "alice");
        add_item(&mut driver, "Buy milk");

        // Remove the row behind the view's back, then act on the stale selection.
        let store = driver.store().unwrap();
        let item = store.find("Buy milk").unwrap();
        store.delete(&item).unwrap();

        assert_eq!(press(&mut driver, Key::Enter), Flow::Continue);
        assert!(driver.app.items.is_empty(), "refresh after the no-op resyncs the view");
    }

    #[test]
    fn test_duplicate_descriptions_resolve_to_first() {
        let mut driver = memory_driver();
        login(&mut driver, "alice");
        add_item(&mut driver, "dup");
        add_item(&mut driver, "dup");

        press(&mut driver, Key::Down);
        press(&mut driver, Key::Enter);
        assert_eq!(rows(&driver), [row("yes", "dup"), row("no", "dup")]);
    }

    #[test]
    fn test_delete_last_row_clamps_cursor() {
        let mut driver = memory_driver();
        login(&mut driver, "alice");
        for description in ["a", "b", "c"] {
            add_item(&mut driver, description);
        }
        press(&mut driver, Key::End);
        press(&mut driver, Key::Delete);

        assert_eq!(driver.app.items.selected(), Some(1));
        assert_eq!(driver.app.items.selected_description(), Some("b"));
    }

    #[test]
    fn test_quit() {
        let mut driver = memory_driver();
        assert_eq!(press(&mut driver, Key::Quit), Flow::Quit);
    }

    #[test]
    fn test_open_failure_is_fatal() {
        let mut driver = failing_driver();
        type_text(&mut driver, "alice");
        let result = driver.dispatch(Action::Key(Key::Enter));
        assert!(result.is_err());
        assert!(driver.app.account.is_none());
        assert_eq!(driver.app.tabs().len(), 1);
    }

    #[test]
    fn test_resolve_selected_not_found() {
        let driver = {
            let mut driver = memory_driver();
            login(&mut driver, "alice");
            driver
        };
        assert!(resolve_selected(driver.store().unwrap(), "nothing").is_none());
    }

    #[test]
    fn test_failed_first_refresh_still_expands_tabs() {
        let (mut driver, faults) = faulty_driver();
        faults.list.set(true);
        login(&mut driver, "alice");

        assert_eq!(driver.app.tabs().len(), 3);
        assert_eq!(driver.app.active(), Tab::Items);
        assert!(driver.app.items.is_empty());

        // The session is usable once the store recovers
        faults.list.set(false);
        add_item(&mut driver, "Buy milk");
        assert_eq!(rows(&driver), [row("no", "Buy milk")]);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_rows() {
        let (mut driver, faults) = faulty_driver();
        login(&mut driver, "alice");
        add_item(&mut driver, "Buy milk");

        faults.list.set(true);
        add_item(&mut driver, "Walk dog");
        assert_eq!(rows(&driver), [row("no", "Buy milk")]);
        assert_eq!(driver.app.items.selected(), Some(0));

        faults.list.set(false);
        press(&mut driver, Key::Enter);
        assert_eq!(rows(&driver), [row("yes", "Buy milk"), row("no", "Walk dog")]);
    }

    #[test]
    fn test_failed_create_keeps_description() {
        let (mut driver, faults) = faulty_driver();
        login(&mut driver, "alice");
        faults.create.set(true);

        press(&mut driver, Key::Tab);
        type_text(&mut driver, "Buy milk");
        assert_eq!(press(&mut driver, Key::Enter), Flow::Continue);

        assert_eq!(driver.app.description_input.value(), "Buy milk");
        assert_eq!(driver.app.active(), Tab::NewItem);
        assert!(driver.app.items.is_empty());
    }

    #[test]
    fn test_failed_update_leaves_item_unchanged() {
        let (mut driver, faults) = faulty_driver();
        login(&mut driver, "alice");
        add_item(&mut driver, "Buy milk");
        faults.update.set(true);

        assert_eq!(press(&mut driver, Key::Enter), Flow::Continue);
        assert_eq!(rows(&driver), [row("no", "Buy milk")]);
    }

    #[test]
    fn test_failed_delete_keeps_row() {
        let (mut driver, faults) = faulty_driver();
        login(&mut driver, "alice");
        add_item(&mut driver, "Buy milk");
        faults.delete.set(true);

        assert_eq!(press(&mut driver, Key::Delete), Flow::Continue);
        assert_eq!(rows(&driver), [row("no", "Buy milk")]);
        assert_eq!(driver.app.items.selected(), Some(0));
    }

    #[test]
    fn test_failed_lookup_is_absorbed() {
        let (mut driver, faults) = faulty_driver();
        login(&mut driver, "alice");
        add_item(&mut driver, "Buy milk");
        faults.find.set(true);

        assert!(resolve_selected(driver.store().unwrap(), "Buy milk").is_none());
        assert_eq!(press(&mut driver, Key::Enter), Flow::Continue);
        assert_eq!(press(&mut driver, Key::Delete), Flow::Continue);
        assert_eq!(rows(&driver), [row("no", "Buy milk")]);
    }
}
