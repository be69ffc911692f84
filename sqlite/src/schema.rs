//! The `inventory` table definition.
//!
//! The table layout is the durable contract of the store: it is created if
//! absent and never dropped or altered.

use rusqlite::Connection;

use crate::error::Result;

/// Name of the single table owned by the store.
pub(crate) const TABLE_NAME: &str = "inventory";

/// `AUTOINCREMENT` keeps ids strictly increasing: an id freed by a delete is
/// never handed out again.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    price INTEGER NOT NULL,
    created_at TEXT
);
"#;

/// Creates the inventory table if it does not exist yet.
pub(crate) fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Checks whether the inventory table exists.
pub(crate) fn table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1")?;
    let count: i64 = stmt.query_row([TABLE_NAME], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_info(conn: &Connection) -> Vec<(String, String, bool, bool)> {
        let mut stmt = conn.prepare("PRAGMA table_info(inventory)").unwrap();
        stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)? != 0,
                row.get::<_, i64>(5)? != 0,
            ))
        })
        .unwrap()
        .collect::<std::result::Result<Vec<_>, _>>()
        .unwrap()
    }

    #[test]
    fn test_schema_sql_uses_autoincrement() {
        assert!(SCHEMA_SQL.contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(!SCHEMA_SQL.contains("DROP"));
    }

    #[test]
    fn test_table_layout() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let columns = column_info(&conn);
        assert_eq!(
            columns,
            vec![
                ("id".to_string(), "INTEGER".to_string(), false, true),
                ("name".to_string(), "TEXT".to_string(), true, false),
                ("quantity".to_string(), "INTEGER".to_string(), true, false),
                ("price".to_string(), "INTEGER".to_string(), true, false),
                ("created_at".to_string(), "TEXT".to_string(), false, false),
            ]
        );
    }

    #[test]
    fn test_init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn).unwrap());

        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO inventory (name, quantity, price) VALUES ('Bolt', 1, 2)",
            [],
        )
        .unwrap();
        init_schema(&conn).unwrap();

        assert!(table_exists(&conn).unwrap());
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_name_is_required() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        assert!(
            conn.execute(
                "INSERT INTO inventory (name, quantity, price) VALUES (NULL, 1, 2)",
                [],
            )
            .is_err()
        );
    }
}
