//! Insert, update and delete operations of the provider.

use log::{debug, warn};
use rusqlite::params_from_iter;

use super::{
    validate::{self, Assignments},
    Selection, ShopProvider,
};
use crate::{
    error::{DatabaseResultExt, Result, ShopError},
    uri::{Address, ContentUri, Table},
    values::ContentValues,
};

/// Outcome of a conflict-ignore insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A row was created at this URI.
    Inserted(ContentUri),
    /// A row with the same product name already exists; nothing was written.
    Ignored,
}

impl InsertOutcome {
    /// URI of the new row, if one was created.
    pub fn uri(&self) -> Option<&ContentUri> {
        match self {
            InsertOutcome::Inserted(uri) => Some(uri),
            InsertOutcome::Ignored => None,
        }
    }

    /// Id of the new row, if one was created.
    pub fn row_id(&self) -> Option<i64> {
        self.uri().and_then(ContentUri::last_id)
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted(_))
    }
}

impl ShopProvider {
    /// Inserts one row into the addressed table, ignoring duplicate names.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::UnsupportedOperation` when `uri` addresses a single
    /// row, `ShopError::InvalidValues` for an unacceptable payload and
    /// `ShopError::Database` on store failures. A duplicate product name is not
    /// an error; it yields [`InsertOutcome::Ignored`].
    pub fn insert(&mut self, uri: &ContentUri, values: &ContentValues) -> Result<InsertOutcome> {
        let table = insertable_table(uri)?;
        let assignments = validate::insert_values(table, values)?;
        self.insert_validated(table, &assignments)
    }

    /// Inserts every payload into the addressed table, one insert per value.
    ///
    /// All payloads are validated before anything is written. Returns how many
    /// rows were actually created; ignored duplicates are not counted.
    pub fn bulk_insert(&mut self, uri: &ContentUri, values: &[ContentValues]) -> Result<usize> {
        let table = insertable_table(uri)?;
        let rows = values
            .iter()
            .map(|v| validate::insert_values(table, v))
            .collect::<Result<Vec<_>>>()?;

        let mut inserted = 0;
        for assignments in &rows {
            if self.insert_validated(table, assignments)?.is_inserted() {
                inserted += 1;
            }
        }
        debug!("bulk insert into {}: {inserted} of {} created", table.name(), rows.len());
        Ok(inserted)
    }

    /// Updates the addressed row, or the rows of the addressed table that match
    /// `selection`. Returns the number of rows changed.
    pub fn update(
        &mut self,
        uri: &ContentUri,
        values: &ContentValues,
        selection: &Selection,
    ) -> Result<usize> {
        let address = Address::resolve(uri)?;
        let assignments = validate::update_values(address.table(), values)?;

        let set_clause = assignments
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql = format!("UPDATE {} SET {set_clause}", address.table().name());
        if let Some(clause) = selection.where_clause(address.row_id()) {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }
        debug!("update {address}: {sql}");

        let params = assignments
            .iter()
            .map(|(_, value)| value)
            .chain(selection.args.iter());
        let changed = self
            .store
            .writable()?
            .execute(&sql, params_from_iter(params))
            .db_context("Failed to update rows")?;

        self.announce(address, changed);
        Ok(changed)
    }

    /// Deletes the addressed row, or the rows of the addressed table that match
    /// `selection` (every row when the selection is empty). Returns the number
    /// of rows removed; zero is not an error.
    pub fn delete(&mut self, uri: &ContentUri, selection: &Selection) -> Result<usize> {
        let address = Address::resolve(uri)?;

        let mut sql = format!("DELETE FROM {}", address.table().name());
        if let Some(clause) = selection.where_clause(address.row_id()) {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }
        debug!("delete {address}: {sql}");

        let removed = self
            .store
            .writable()?
            .execute(&sql, params_from_iter(selection.args.iter()))
            .db_context("Failed to delete rows")?;

        self.announce(address, removed);
        Ok(removed)
    }

    /// Deletes each addressed row in turn and sums the rows removed.
    ///
    /// Only row addresses are accepted; a table address stops the batch.
    /// Deletes are applied one by one without a surrounding transaction, so a
    /// failure leaves the earlier deletes in place.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::BatchFailed` carrying the number of rows already
    /// removed and the error that stopped the batch.
    pub fn delete_batch(&mut self, uris: &[ContentUri]) -> Result<usize> {
        let mut applied = 0;
        for uri in uris {
            let step = batch_row(uri)
                .and_then(|address| self.delete(&address.uri(), &Selection::all()));
            match step {
                Ok(removed) => applied += removed,
                Err(source) => {
                    warn!("Delete batch stopped at {uri} after {applied} row(s): {source}");
                    return Err(ShopError::BatchFailed {
                        applied,
                        source: Box::new(source),
                    });
                }
            }
        }
        Ok(applied)
    }

    fn insert_validated(&mut self, table: Table, assignments: &Assignments) -> Result<InsertOutcome> {
        let columns = assignments
            .iter()
            .map(|(column, _)| *column)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; assignments.len()].join(", ");
        let sql = format!("INSERT INTO {} ({columns}) VALUES ({placeholders})", table.name());

        let connection = self.store.writable()?;
        let created = connection
            .execute(&sql, params_from_iter(assignments.iter().map(|(_, v)| v)))
            .db_context("Failed to insert row")?;

        if created == 0 {
            debug!("insert into {} ignored: duplicate product", table.name());
            return Ok(InsertOutcome::Ignored);
        }

        let address = Address::row(table, connection.last_insert_rowid());
        self.announce(address, created);
        Ok(InsertOutcome::Inserted(address.uri()))
    }
}

/// Inserts are only meaningful against a whole table.
fn insertable_table(uri: &ContentUri) -> Result<Table> {
    match Address::resolve(uri)? {
        Address::ListTable => Ok(Table::List),
        Address::HistoryTable => Ok(Table::History),
        Address::ListRow(_) | Address::HistoryRow(_) => Err(ShopError::unsupported("insert", uri)),
    }
}

/// Batch steps address exactly one row.
fn batch_row(uri: &ContentUri) -> Result<Address> {
    let address = Address::resolve(uri)?;
    match address.row_id() {
        Some(_) => Ok(address),
        None => Err(ShopError::unsupported("delete_batch", uri)),
    }
}
