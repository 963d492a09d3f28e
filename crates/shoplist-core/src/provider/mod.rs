//! URI-addressed access to the list and history tables.
//!
//! [`ShopProvider`] is the only component that talks to the store. Each call
//! takes a [`ContentUri`], resolves it once into an [`Address`] and then works
//! on that typed address:
//!
//! ```text
//! ┌──────────────┐   resolve   ┌──────────────┐   SQL    ┌──────────────┐
//! │  ContentUri  │────────────▶│   Address    │─────────▶│ StoreHelper  │
//! └──────────────┘             └──────────────┘          └──────────────┘
//!                                     │ rows changed > 0
//!                                     ▼
//!                              ┌──────────────┐
//!                              │ChangeNotifier│
//!                              └──────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use shoplist_core::{
//!     contract, ChangeNotifier, ContentValues, InsertOutcome, QueryArgs, ShopProvider,
//! };
//!
//! # fn example() -> shoplist_core::Result<()> {
//! let dir = tempfile::tempdir().unwrap();
//! let mut provider = ShopProvider::new(dir.path().join("shop.db"), ChangeNotifier::new());
//!
//! let bread = ContentValues::new().with("product", "Bread");
//! assert!(matches!(
//!     provider.insert(&contract::list_uri(), &bread)?,
//!     InsertOutcome::Inserted(_)
//! ));
//! assert_eq!(provider.insert(&contract::list_uri(), &bread)?, InsertOutcome::Ignored);
//!
//! let cursor = provider.query(&contract::list_uri(), &QueryArgs::new())?;
//! assert_eq!(cursor.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::path::Path;

use log::debug;
use rusqlite::params_from_iter;

use crate::{
    db::StoreHelper,
    error::{DatabaseResultExt, Result, ShopError},
    notify::ChangeNotifier,
    uri::{Address, ContentUri, Table},
    values::Value,
};

pub mod cursor;
mod mutations;
pub mod request;
mod validate;

pub use cursor::{Cursor, RowRef};
pub use mutations::InsertOutcome;
pub use request::{QueryArgs, Selection};

/// Façade over the store that routes URI-addressed CRUD requests.
pub struct ShopProvider {
    store: StoreHelper,
    notifier: ChangeNotifier,
}

impl ShopProvider {
    /// Creates a provider for the store at `path`. The store is opened on the
    /// first call that needs it.
    pub fn new<P: AsRef<Path>>(path: P, notifier: ChangeNotifier) -> Self {
        Self::with_store(StoreHelper::new(path), notifier)
    }

    /// Creates a provider around an existing store helper.
    pub fn with_store(store: StoreHelper, notifier: ChangeNotifier) -> Self {
        Self { store, notifier }
    }

    /// Notifier this provider publishes changes to.
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn store(&self) -> &StoreHelper {
        &self.store
    }

    /// Runs a read against the addressed table or row and returns a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::UnsupportedUri` for unknown addresses,
    /// `ShopError::InvalidValues` for projections naming unknown columns and
    /// `ShopError::Database` when SQLite rejects the statement.
    pub fn query(&mut self, uri: &ContentUri, args: &QueryArgs) -> Result<Cursor> {
        let address = Address::resolve(uri)?;
        let table = address.table();
        let columns = projection(table, args.projection.as_deref())?;

        let mut sql = format!("SELECT {} FROM {}", columns.join(", "), table.name());
        if let Some(clause) = args.selection.where_clause(address.row_id()) {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }
        if let Some(order) = args.sort_order.as_deref().filter(|o| !o.trim().is_empty()) {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        debug!("query {address}: {sql}");

        let connection = self.store.readable()?;
        let mut stmt = connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;
        let width = columns.len();
        let rows = stmt
            .query_map(params_from_iter(args.selection.args.iter()), |row| {
                (0..width)
                    .map(|i| row.get::<_, Value>(i))
                    .collect::<rusqlite::Result<Vec<Value>>>()
            })
            .db_context("Failed to run query")?
            .collect::<rusqlite::Result<Vec<Vec<Value>>>>()
            .db_context("Failed to read query results")?;

        Ok(Cursor::new(columns, rows, address.uri()))
    }

    /// Publishes `address` when `changed` rows is non-zero.
    fn announce(&self, address: Address, changed: usize) {
        if changed > 0 {
            self.notifier.notify_change(&address.uri());
        }
    }
}

/// Resolves the projection, defaulting to every column of the table.
fn projection(table: Table, requested: Option<&[String]>) -> Result<Vec<String>> {
    let Some(requested) = requested.filter(|r| !r.is_empty()) else {
        return Ok(table.columns().iter().map(|c| c.to_string()).collect());
    };

    requested
        .iter()
        .map(|column| {
            if table.columns().contains(&column.as_str()) {
                Ok(column.clone())
            } else {
                Err(ShopError::invalid_values(column.as_str())
                    .with_reason(format!("unknown column for table '{}'", table.name())))
            }
        })
        .collect()
}
