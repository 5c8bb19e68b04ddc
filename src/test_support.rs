//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::core::action::Action;
use crate::core::driver::{Driver, Flow};
use crate::core::key::Key;
use crate::store::{
    DEFAULT_PAGE_SIZE, Item, ItemId, ItemStore, SqliteItemStore, StoreError,
};

/// A driver whose accounts all open fresh in-memory stores.
pub fn memory_driver() -> Driver {
    Driver::new(Box::new(|_account: &str| -> Result<Box<dyn ItemStore>, StoreError> {
        let store = SqliteItemStore::open_in_memory(DEFAULT_PAGE_SIZE)?;
        Ok(Box::new(store) as Box<dyn ItemStore>)
    }))
}

/// A driver whose store can never be opened.
pub fn failing_driver() -> Driver {
    Driver::new(Box::new(|account: &str| -> Result<Box<dyn ItemStore>, StoreError> {
        Err(StoreError::DataDir {
            path: PathBuf::from(format!("/unwritable/{account}")),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }))
}

/// Which store operations fail. Flip these at any point during a test.
#[derive(Debug, Default)]
pub struct Faults {
    pub create: Cell<bool>,
    pub update: Cell<bool>,
    pub delete: Cell<bool>,
    pub list: Cell<bool>,
    pub find: Cell<bool>,
}

/// An in-memory store that returns an engine error for every operation
/// switched on in its shared `Faults`.
pub struct FaultyStore {
    inner: SqliteItemStore,
    faults: Rc<Faults>,
}

fn engine_error() -> StoreError {
    StoreError::Sql(rusqlite::Error::InvalidQuery)
}

fn check(fault: &Cell<bool>) -> Result<(), StoreError> {
    if fault.get() { Err(engine_error()) } else { Ok(()) }
}

impl ItemStore for FaultyStore {
    fn create(&self, item: &mut Item) -> Result<ItemId, StoreError> {
        check(&self.faults.create)?;
        self.inner.create(item)
    }

    fn update(&self, item: &Item) -> Result<(), StoreError> {
        check(&self.faults.update)?;
        self.inner.update(item)
    }

    fn delete(&self, item: &Item) -> Result<(), StoreError> {
        check(&self.faults.delete)?;
        self.inner.delete(item)
    }

    fn list(&self, page: usize) -> Result<Vec<Item>, StoreError> {
        check(&self.faults.list)?;
        self.inner.list(page)
    }

    fn find(&self, description: &str) -> Result<Item, StoreError> {
        check(&self.faults.find)?;
        self.inner.find(description)
    }
}

/// A driver over a `FaultyStore`, plus the switches controlling it.
pub fn faulty_driver() -> (Driver, Rc<Faults>) {
    let faults = Rc::new(Faults::default());
    let shared = Rc::clone(&faults);
    let driver = Driver::new(Box::new(
        move |_account: &str| -> Result<Box<dyn ItemStore>, StoreError> {
            let store = FaultyStore {
                inner: SqliteItemStore::open_in_memory(DEFAULT_PAGE_SIZE)?,
                faults: Rc::clone(&shared),
            };
            Ok(Box::new(store) as Box<dyn ItemStore>)
        },
    ));
    (driver, faults)
}

/// Dispatch a single key, panicking on a fatal store error.
pub fn press(driver: &mut Driver, key: Key) -> Flow {
    driver.dispatch(Action::Key(key)).unwrap()
}

/// Type each character of `text` into whatever has focus.
pub fn type_text(driver: &mut Driver, text: &str) {
    for c in text.chars() {
        press(driver, Key::Char(c));
    }
}
