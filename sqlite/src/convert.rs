//! Mapping between [`InventoryItem`] and rows of the `inventory` table.

use inventory_core::InventoryItem;
use rusqlite::Row;

/// Column list matching the field order read by [`item_from_row`].
pub(crate) const ITEM_COLUMNS: &str = "id, name, quantity, price, created_at";

/// Builds an [`InventoryItem`] from a row selected with [`ITEM_COLUMNS`].
pub(crate) fn item_from_row(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    Ok(InventoryItem {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        price: row.get(3)?,
        created_at: row.get(4)?,
    })
}
