//! # Item Storage
//!
//! Persistence for to-do items, one store per account.
//!
//! The rest of the app only talks to the [`ItemStore`] trait, so the backing
//! engine can change without touching the state machine. The shipped backend is
//! [`SqliteItemStore`], which keeps each account in its own `<account>.db` file.
//!
//! ```text
//! ItemStore
//! ├── create(item)      → id      (assigns id + audit timestamps)
//! ├── update(item)                (saves description/done, bumps updated_at)
//! ├── delete(item)                (soft delete: sets deleted_at)
//! ├── list(page)        → [Item]  (insertion order, page_size per page)
//! └── find(description) → Item    (first live match, or NotFound)
//! ```

mod sqlite;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

pub use sqlite::{SqliteItemStore, database_path};

/// Number of items returned per `list` page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Store-assigned item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do list entry.
///
/// `id` is `None` until the item has been created in a store. The audit
/// timestamps are owned by the store and overwritten on create/update.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Option<ItemId>,
    pub description: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Item {
    /// A fresh, unsaved item that is not done yet.
    pub fn new(description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            description: description.into(),
            done: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Label for the "Done" column.
    pub fn done_label(&self) -> &'static str {
        if self.done { "yes" } else { "no" }
    }
}

/// Errors returned by an [`ItemStore`].
///
/// `NotFound` is the only variant callers are expected to branch on; the rest
/// describe engine failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no matching item")]
    NotFound,

    #[error("cannot open item store at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("cannot create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema migration failed: {0}")]
    Migrate(#[source] rusqlite::Error),

    #[error("storage error: {0}")]
    Sql(#[from] rusqlite::Error),
}

/// Persistence operations over a single account's items.
///
/// All calls are synchronous. Implementations are owned by exactly one
/// driver, so no `Send`/`Sync` bound is required.
pub trait ItemStore {
    /// Persist a new item, writing the assigned id and timestamps back into it.
    fn create(&self, item: &mut Item) -> Result<ItemId, StoreError>;

    /// Save `description` and `done` of an existing item.
    fn update(&self, item: &Item) -> Result<(), StoreError>;

    /// Remove an item from listings and lookups.
    fn delete(&self, item: &Item) -> Result<(), StoreError>;

    /// One page of live items in insertion order. Pages start at 1.
    fn list(&self, page: usize) -> Result<Vec<Item>, StoreError>;

    /// The first live item whose description matches exactly.
    fn find(&self, description: &str) -> Result<Item, StoreError>;
}

/// Opens the store for an account name. Called once per session.
pub type StoreOpener = Box<dyn Fn(&str) -> Result<Box<dyn ItemStore>, StoreError>>;
