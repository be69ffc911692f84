//! SQLite storage backend for inventory items.
//!
//! This crate owns the single `inventory` table and exposes the five store
//! operations (create, list, search, update quantity, delete) through
//! [`InventoryStore`].
//!
//! # Architecture
//!
//! - **`schema`**: the table definition and idempotent initialization
//! - **`convert`**: `InventoryItem` ↔ SQL row mapping
//! - **`store`**: the store itself; every call opens its own connection
//!   and closes it before returning
//!
//! # Quick start
//!
//! ```no_run
//! use inventory_core::{NewItem, Outcome};
//! use inventory_sqlite::InventoryStore;
//!
//! let store = InventoryStore::open("inventory.db").unwrap();
//! let id = store.create(&NewItem::new("Widget", 10, 500)).unwrap();
//!
//! for item in store.search_by_name("idg").unwrap() {
//!     println!("{} x{}", item.name, item.quantity);
//! }
//!
//! assert_eq!(store.update_quantity(id, 3).unwrap(), Outcome::Success);
//! assert_eq!(store.delete_by_id(id).unwrap(), Outcome::Success);
//! ```

mod convert;
mod error;
mod schema;
mod store;

pub use error::{Result, StoreError};
pub use store::{InventoryStore, StoreStatus};
