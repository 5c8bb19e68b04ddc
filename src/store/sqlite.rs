//! SQLite item store: one database file per account.
//!
//! Deletes are soft: a deleted row keeps its data and gets a `deleted_at`
//! stamp, and every read filters on `deleted_at IS NULL`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{Item, ItemId, ItemStore, StoreError};

/// Bumped whenever `migrate` gains a step.
const SCHEMA_VERSION: i32 = 1;

const SELECT_COLUMNS: &str = "id, description, done, created_at, updated_at, deleted_at";

/// SQLite-backed implementation of [`ItemStore`].
pub struct SqliteItemStore {
    conn: Connection,
    path: Option<PathBuf>,
    page_size: usize,
}

impl SqliteItemStore {
    /// Open (or create) `<data_dir>/<account>.db` and migrate its schema.
    pub fn open(data_dir: &Path, account: &str, page_size: usize) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir).map_err(|source| StoreError::DataDir {
            path: data_dir.to_path_buf(),
            source,
        })?;

        let path = database_path(data_dir, account);
        let conn = Connection::open(&path).map_err(|source| StoreError::Open {
            path: path.clone(),
            source,
        })?;
        migrate(&conn)?;
        info!("Opened item store {}", path.display());

        Ok(Self {
            conn,
            path: Some(path),
            page_size: page_size.max(1),
        })
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory(page_size: usize) -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        migrate(&conn)?;
        Ok(Self {
            conn,
            path: None,
            page_size: page_size.max(1),
        })
    }

    /// Database file backing this store (`None` when in memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

}

impl ItemStore for SqliteItemStore {
    fn create(&self, item: &mut Item) -> Result<ItemId, StoreError> {
        let now = Utc::now();
        self.conn
            .prepare_cached(
                "INSERT INTO todo_items (description, done, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)",
            )?
            .execute(params![item.description, item.done, now.timestamp_millis()])?;

        let id = ItemId(self.conn.last_insert_rowid());
        item.id = Some(id);
        item.created_at = now;
        item.updated_at = now;
        item.deleted_at = None;
        debug!("Created item {id}");
        Ok(id)
    }

    fn update(&self, item: &Item) -> Result<(), StoreError> {
        let id = item.id.ok_or(StoreError::NotFound)?;
        let changed = self
            .conn
            .prepare_cached(
                "UPDATE todo_items SET description = ?1, done = ?2, updated_at = ?3
                 WHERE id = ?4 AND deleted_at IS NULL",
            )?
            .execute(params![
                item.description,
                item.done,
                Utc::now().timestamp_millis(),
                id.0
            ])?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        debug!("Updated item {id} (done={})", item.done);
        Ok(())
    }

    fn delete(&self, item: &Item) -> Result<(), StoreError> {
        let id = item.id.ok_or(StoreError::NotFound)?;
        let now = Utc::now().timestamp_millis();
        let changed = self
            .conn
            .prepare_cached(
                "UPDATE todo_items SET deleted_at = ?1, updated_at = ?1
                 WHERE id = ?2 AND deleted_at IS NULL",
            )?
            .execute(params![now, id.0])?;
        if changed == 0 {
            return Err(StoreError::NotFound);
        }
        debug!("Deleted item {id}");
        Ok(())
    }

    fn list(&self, page: usize) -> Result<Vec<Item>, StoreError> {
        let page = page.max(1);
        let offset = (page - 1) * self.page_size;
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM todo_items
             WHERE deleted_at IS NULL
             ORDER BY id
             LIMIT ?1 OFFSET ?2"
        ))?;
        let items = stmt
            .query_map(params![self.page_size as i64, offset as i64], item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn find(&self, description: &str) -> Result<Item, StoreError> {
        self.conn
            .prepare_cached(&format!(
                "SELECT {SELECT_COLUMNS} FROM todo_items
                 WHERE description = ?1 AND deleted_at IS NULL
                 ORDER BY id
                 LIMIT 1"
            ))?
            .query_row(params![description], item_from_row)
            .optional()?
            .ok_or(StoreError::NotFound)
    }
}

/// `<data_dir>/<account>.db`, with path separators in the account name
/// replaced so the file always lands directly in `data_dir`.
pub fn database_path(data_dir: &Path, account: &str) -> PathBuf {
    let stem: String = account
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    data_dir.join(format!("{stem}.db"))
}

/// Bring the schema up to `SCHEMA_VERSION`. Safe to run on every open.
fn migrate(conn: &Connection) -> Result<(), StoreError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(StoreError::Migrate)?;

    if version < 1 {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS todo_items (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT    NOT NULL,
                done        INTEGER NOT NULL DEFAULT 0,
                created_at  INTEGER NOT NULL,
                updated_at  INTEGER NOT NULL,
                deleted_at  INTEGER
            );
            CREATE INDEX IF NOT EXISTS idx_todo_items_description ON todo_items(description);
            CREATE INDEX IF NOT EXISTS idx_todo_items_deleted_at ON todo_items(deleted_at);
            ",
        )
        .map_err(StoreError::Migrate)?;
    }

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(StoreError::Migrate)?;
        info!("Migrated item schema from v{version} to v{SCHEMA_VERSION}");
    }
    Ok(())
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: Some(ItemId(row.get(0)?)),
        description: row.get(1)?,
        done: row.get(2)?,
        created_at: from_millis(row.get(3)?),
        updated_at: from_millis(row.get(4)?),
        deleted_at: row.get::<_, Option<i64>>(5)?.map(from_millis),
    })
}

fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_PAGE_SIZE;

    fn store() -> SqliteItemStore {
        SqliteItemStore::open_in_memory(DEFAULT_PAGE_SIZE).unwrap()
    }

    fn add(store: &SqliteItemStore, description: &str) -> Item {
        let mut item = Item::new(description);
        store.create(&mut item).unwrap();
        item
    }

    #[test]
    fn test_create_assigns_id() {
        let store = store();
        let first = add(&store, "Tickle the cat");
        let second = add(&store, "Buy fishy treats");
        assert!(first.id.is_some());
        assert!(second.id > first.id);
    }

    #[test]
    fn test_find_returns_created_item() {
        let store = store();
        add(&store, "Tickle the cat");

        let found = store.find("Tickle the cat").unwrap();
        assert_eq!(found.description, "Tickle the cat");
        assert!(!found.done, "Newly added item is marked done by default");
    }

    #[test]
    fn test_find_missing_is_not_found() {
        let store = store();
        assert!(matches!(store.find("nothing"), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_find_returns_first_of_duplicates() {
        let store = store();
        let first = add(&store, "dup");
        add(&store, "dup");
        assert_eq!(store.find("dup").unwrap().id, first.id);
    }

    #[test]
    fn test_update_persists_done() {
        let store = store();
        let mut item = add(&store, "Tickle the cat");
        item.done = true;
        store.update(&item).unwrap();

        assert!(store.find("Tickle the cat").unwrap().done);
    }

    #[test]
    fn test_toggle_twice_restores_done() {
        let store = store();
        add(&store, "Tickle the cat");

        for _ in 0..2 {
            let mut item = store.find("Tickle the cat").unwrap();
            item.done = !item.done;
            store.update(&item).unwrap();
        }
        assert!(!store.find("Tickle the cat").unwrap().done);
    }

    #[test]
    fn test_update_unsaved_item_is_not_found() {
        let store = store();
        let item = Item::new("never created");
        assert!(matches!(store.update(&item), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_delete_is_soft_and_hides_item() {
        let store = store();
        let item = add(&store, "Tickle the cat");
        store.delete(&item).unwrap();

        assert!(matches!(store.find("Tickle the cat"), Err(StoreError::NotFound)));
        assert!(store.list(1).unwrap().is_empty());

        let deleted_at: Option<i64> = store
            .conn
            .query_row(
                "SELECT deleted_at FROM todo_items WHERE id = ?1",
                params![item.id.unwrap().0],
                |row| row.get(0),
            )
            .unwrap();
        assert!(deleted_at.is_some(), "row should be kept with a deleted_at stamp");
    }

    #[test]
    fn test_delete_twice_is_not_found() {
        let store = store();
        let item = add(&store, "x");
        store.delete(&item).unwrap();
        assert!(matches!(store.delete(&item), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_update_deleted_item_is_not_found() {
        let store = store();
        let mut item = add(&store, "x");
        store.delete(&item).unwrap();
        item.done = true;
        assert!(matches!(store.update(&item), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_list_in_insertion_order() {
        let store = store();
        add(&store, "Tickle the cat");
        add(&store, "Buy fishy treats");

        let items = store.list(1).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Tickle the cat");
        assert_eq!(items[1].description, "Buy fishy treats");
    }

    #[test]
    fn test_list_pages_by_page_size() {
        let store = SqliteItemStore::open_in_memory(3).unwrap();
        for i in 0..7 {
            add(&store, &format!("item {i}"));
        }

        let page1 = store.list(1).unwrap();
        let page3 = store.list(3).unwrap();
        assert_eq!(page1.len(), 3);
        assert_eq!(page1[0].description, "item 0");
        assert_eq!(store.list(2).unwrap()[0].description, "item 3");
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].description, "item 6");
        assert!(store.list(4).unwrap().is_empty());
    }

    #[test]
    fn test_list_page_zero_is_first_page() {
        let store = store();
        add(&store, "a");
        assert_eq!(store.list(0).unwrap(), store.list(1).unwrap());
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let store = store();
        add(&store, "kept");
        migrate(&store.conn).unwrap();
        migrate(&store.conn).unwrap();
        assert_eq!(store.list(1).unwrap().len(), 1);
    }

    #[test]
    fn test_database_path_strips_separators() {
        let dir = Path::new("/data");
        assert_eq!(database_path(dir, "alice"), PathBuf::from("/data/alice.db"));
        assert_eq!(database_path(dir, "../bob"), PathBuf::from("/data/.._bob.db"));
    }
}
