//! Schema creation and version upgrades.
//!
//! Upgrades are destructive: when the stored version is older than the
//! build's, both tables are dropped and recreated empty. No rows survive.

use log::{info, warn};
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result, ShopError};

const CREATE_SQL: &str = include_str!("../../assets/schema.sql");
const DROP_SQL: &str = include_str!("../../assets/drop.sql");

/// Reads `PRAGMA user_version`; 0 means the file has never been initialized.
pub fn stored_version(connection: &Connection) -> Result<i32> {
    connection
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .db_context("Failed to read schema version")
}

/// Brings a freshly opened connection to `version`.
pub(crate) fn prepare(connection: &mut Connection, version: i32) -> Result<()> {
    let stored = stored_version(connection)?;

    if stored == version {
        return Ok(());
    }
    if stored > version {
        return Err(ShopError::SchemaVersion {
            found: stored,
            supported: version,
        });
    }

    let tx = connection
        .transaction()
        .db_context("Failed to begin schema transaction")?;

    if stored == 0 {
        info!("Creating store schema version {version}");
    } else {
        warn!("Upgrading store schema from version {stored} to {version}; existing rows are discarded");
        tx.execute_batch(DROP_SQL)
            .db_context("Failed to drop tables for upgrade")?;
    }

    tx.execute_batch(CREATE_SQL)
        .db_context("Failed to create database schema")?;
    tx.execute_batch(&format!("PRAGMA user_version = {version}"))
        .db_context("Failed to record schema version")?;
    tx.commit().db_context("Failed to commit schema transaction")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(connection: &Connection) -> Vec<String> {
        let mut stmt = connection
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_fresh_store_gets_both_tables() {
        let mut connection = Connection::open_in_memory().unwrap();
        prepare(&mut connection, 2).unwrap();

        assert_eq!(table_names(&connection), vec!["history", "list"]);
        assert_eq!(stored_version(&connection).unwrap(), 2);
    }

    #[test]
    fn test_upgrade_discards_rows() {
        let mut connection = Connection::open_in_memory().unwrap();
        prepare(&mut connection, 1).unwrap();
        connection
            .execute("INSERT INTO list (product) VALUES ('Milk')", [])
            .unwrap();
        connection
            .execute("INSERT INTO history (product) VALUES ('Milk')", [])
            .unwrap();

        prepare(&mut connection, 2).unwrap();

        let rows: i64 = connection
            .query_row("SELECT (SELECT COUNT(*) FROM list) + (SELECT COUNT(*) FROM history)", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0);
        assert_eq!(stored_version(&connection).unwrap(), 2);
    }

    #[test]
    fn test_same_version_keeps_rows() {
        let mut connection = Connection::open_in_memory().unwrap();
        prepare(&mut connection, 2).unwrap();
        connection
            .execute("INSERT INTO list (product) VALUES ('Eggs')", [])
            .unwrap();

        prepare(&mut connection, 2).unwrap();

        let rows: i64 = connection
            .query_row("SELECT COUNT(*) FROM list", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_downgrade_is_refused() {
        let mut connection = Connection::open_in_memory().unwrap();
        prepare(&mut connection, 3).unwrap();

        let err = prepare(&mut connection, 2).unwrap_err();
        assert!(matches!(
            err,
            ShopError::SchemaVersion {
                found: 3,
                supported: 2
            }
        ));
    }

    #[test]
    fn test_unique_constraint_ignores_duplicates() {
        let mut connection = Connection::open_in_memory().unwrap();
        prepare(&mut connection, 2).unwrap();

        let first = connection
            .execute("INSERT INTO list (product, priority) VALUES ('Tea', 1)", [])
            .unwrap();
        let second = connection
            .execute("INSERT INTO list (product, priority) VALUES ('Tea', 3)", [])
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 0);
    }
}
