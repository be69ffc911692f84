//! The inventory store.
//!
//! [`InventoryStore`] holds only the location of the database file. Every
//! operation opens its own connection, runs its statement (or
//! check-then-statement pair), and drops the connection before returning,
//! on error paths as well as on success.
//!
//! # Example
//!
//! ```no_run
//! use inventory_core::{NewItem, Outcome};
//! use inventory_sqlite::InventoryStore;
//!
//! let store = InventoryStore::open("inventory.db").unwrap();
//! store.create(&NewItem::new("Widget", 10, 500)).unwrap();
//!
//! match store.delete_by_id(9999).unwrap() {
//!     Outcome::Success => println!("deleted"),
//!     Outcome::NotFound => println!("no such item"),
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::Local;
use inventory_core::{
    CREATED_AT_FORMAT, InventoryItem, NewItem, Outcome, validate_amount, validate_amounts,
};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::convert::{ITEM_COLUMNS, item_from_row};
use crate::error::{Result, StoreError};
use crate::schema;

/// SQLite-backed store owning the `inventory` table.
///
/// Construct it once at startup with [`open`](Self::open) and pass it by
/// reference to whatever needs it.
///
/// The store trusts the caller for the item name but rejects negative
/// quantities and prices with [`StoreError::Validation`] before any
/// statement runs.
///
/// # Examples
///
/// ```no_run
/// use inventory_core::NewItem;
/// use inventory_sqlite::InventoryStore;
///
/// let store = InventoryStore::open("inventory.db").unwrap();
/// let id = store.create(&NewItem::new("Bolt", 100, 12)).unwrap();
///
/// let item = store.get(id).unwrap().unwrap();
/// assert_eq!(item.quantity, 100);
///
/// let all = store.list_all().unwrap();
/// println!("{} items in stock", all.len());
/// ```
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// inventory table exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] if the file cannot be opened, or
    /// [`StoreError::Storage`] if the table cannot be created (for example
    /// when the file is not a SQLite database).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        let conn = store.connect()?;
        schema::init_schema(&conn)?;
        debug!(path = %store.path.display(), "inventory table ready");
        Ok(store)
    }

    /// Returns the location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts a new item and returns its freshly assigned id.
    ///
    /// `created_at` is set to the current local time. The name is stored
    /// as given; checking it is the caller's job.
    pub fn create(&self, item: &NewItem) -> Result<i64> {
        validate_amounts(item.quantity, item.price)?;
        let created_at = Local::now().format(CREATED_AT_FORMAT).to_string();

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO inventory (name, quantity, price, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![item.name, item.quantity, item.price, created_at],
        )?;
        let id = conn.last_insert_rowid();

        info!(id, name = %item.name, "created inventory item");
        Ok(id)
    }

    /// Returns every stored item in id order.
    ///
    /// An empty store yields an empty vector.
    pub fn list_all(&self) -> Result<Vec<InventoryItem>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory ORDER BY id"
        ))?;

        let items = stmt
            .query_map([], item_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(count = items.len(), "listed inventory");
        Ok(items)
    }

    /// Returns the items whose name contains `term`, case-sensitively.
    ///
    /// `%` and `_` in `term` match literally. An empty term matches every
    /// item.
    pub fn search_by_name(&self, term: &str) -> Result<Vec<InventoryItem>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory WHERE ?1 = '' OR instr(name, ?1) > 0 ORDER BY id"
        ))?;

        let items = stmt
            .query_map(params![term], item_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(term, count = items.len(), "searched inventory");
        Ok(items)
    }

    /// Loads a single item by id.
    pub fn get(&self, id: i64) -> Result<Option<InventoryItem>> {
        let conn = self.connect()?;
        let item = conn
            .query_row(
                &format!("SELECT {ITEM_COLUMNS} FROM inventory WHERE id = ?1"),
                params![id],
                item_from_row,
            )
            .optional()?;
        Ok(item)
    }

    /// Replaces the quantity of item `id`, leaving every other field alone.
    ///
    /// The existence check and the update run in one transaction.
    pub fn update_quantity(&self, id: i64, quantity: i64) -> Result<Outcome> {
        validate_amount(quantity)?;

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let exists = tx
            .query_row("SELECT 1 FROM inventory WHERE id = ?1", params![id], |_| {
                Ok(())
            })
            .optional()?
            .is_some();
        if !exists {
            debug!(id, "update target not found");
            return Ok(Outcome::NotFound);
        }

        tx.execute(
            "UPDATE inventory SET quantity = ?1 WHERE id = ?2",
            params![quantity, id],
        )?;
        tx.commit()?;

        info!(id, quantity, "updated inventory quantity");
        Ok(Outcome::Success)
    }

    /// Permanently removes item `id`.
    pub fn delete_by_id(&self, id: i64) -> Result<Outcome> {
        let conn = self.connect()?;
        let rows = conn.execute("DELETE FROM inventory WHERE id = ?1", params![id])?;

        if rows == 0 {
            debug!(id, "delete target not found");
            return Ok(Outcome::NotFound);
        }

        info!(id, "deleted inventory item");
        Ok(Outcome::Success)
    }

    /// Returns a snapshot of the table state.
    pub fn status(&self) -> Result<StoreStatus> {
        let conn = self.connect()?;
        if !schema::table_exists(&conn)? {
            return Ok(StoreStatus {
                table_exists: false,
                item_count: 0,
                last_assigned_id: None,
            });
        }

        let item_count: usize =
            conn.query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))?;
        let last_assigned_id = conn
            .query_row(
                "SELECT seq FROM sqlite_sequence WHERE name = ?1",
                params![schema::TABLE_NAME],
                |row| row.get(0),
            )
            .optional()?;

        Ok(StoreStatus {
            table_exists: true,
            item_count,
            last_assigned_id,
        })
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })
    }
}

/// State of the inventory table, returned by [`InventoryStore::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    /// Whether the inventory table exists.
    pub table_exists: bool,
    /// Number of items stored.
    pub item_count: usize,
    /// Highest id ever assigned, including ids of deleted items.
    pub last_assigned_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, InventoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = InventoryStore::open(dir.path().join("inventory.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");
        let store = InventoryStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_store_does_not_check_name() {
        let (_dir, store) = temp_store();
        let id = store.create(&NewItem::new("", 1, 1)).unwrap();
        assert_eq!(store.get(id).unwrap().unwrap().name, "");
    }

    #[test]
    fn test_get_missing_returns_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(42).unwrap(), None);
    }

    #[test]
    fn test_status_on_fresh_store() {
        let (_dir, store) = temp_store();
        let status = store.status().unwrap();
        assert!(status.table_exists);
        assert_eq!(status.item_count, 0);
        assert_eq!(status.last_assigned_id, None);
    }

    #[test]
    fn test_status_after_table_dropped_externally() {
        let (_dir, store) = temp_store();
        store.create(&NewItem::new("a", 1, 1)).unwrap();

        let conn = Connection::open(store.path()).unwrap();
        conn.execute_batch("DROP TABLE inventory;").unwrap();
        drop(conn);

        let status = store.status().unwrap();
        assert_eq!(
            status,
            StoreStatus {
                table_exists: false,
                item_count: 0,
                last_assigned_id: None,
            }
        );
        assert!(store.list_all().unwrap_err().is_storage());
        assert!(store.update_quantity(1, 2).unwrap_err().is_storage());
    }

    #[test]
    fn test_status_tracks_last_assigned_id_after_delete() {
        let (_dir, store) = temp_store();
        store.create(&NewItem::new("a", 1, 1)).unwrap();
        let id = store.create(&NewItem::new("b", 1, 1)).unwrap();
        assert!(store.delete_by_id(id).unwrap().is_success());

        let status = store.status().unwrap();
        assert_eq!(status.item_count, 1);
        assert_eq!(status.last_assigned_id, Some(id));
    }
}
