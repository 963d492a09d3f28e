//! Typed views over list and history rows.

use serde::{Deserialize, Serialize};

use crate::{
    contract::{history, list, Priority},
    error::{Result, ShopError},
    provider::{Cursor, RowRef},
    uri::{Address, ContentUri},
    values::{ContentValues, Value},
};

/// One entry on the current shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductEntry {
    /// Row id, assigned by the store
    pub id: i64,

    /// Product name, unique within the list
    pub product: String,

    #[serde(default)]
    pub priority: Priority,

    /// Free-form note such as a brand or quantity
    pub annotation: Option<String>,
}

impl ProductEntry {
    /// Reads an entry from a full-projection list row.
    pub fn from_row(row: &RowRef<'_>) -> Result<Self> {
        let code = required(row.get_i64(list::COLUMN_PRIORITY), list::COLUMN_PRIORITY)?;
        Ok(Self {
            id: required(row.get_i64(list::COLUMN_ID), list::COLUMN_ID)?,
            product: required(row.get_str(list::COLUMN_PRODUCT), list::COLUMN_PRODUCT)?.to_string(),
            priority: Priority::from_code(code).ok_or_else(|| {
                ShopError::invalid_values(list::COLUMN_PRIORITY)
                    .with_reason(format!("unknown priority code {code}"))
            })?,
            annotation: row.get_str(list::COLUMN_ANNOTATION).map(String::from),
        })
    }

    /// Reads every row of a list snapshot.
    pub fn from_cursor(cursor: &Cursor) -> Result<Vec<Self>> {
        cursor.rows().map(|row| Self::from_row(&row)).collect()
    }

    /// URI addressing this entry.
    pub fn uri(&self) -> ContentUri {
        Address::ListRow(self.id).uri()
    }

    /// Insert payload that recreates this entry under a fresh id.
    pub fn to_values(&self) -> ContentValues {
        ContentValues::new()
            .with(list::COLUMN_PRODUCT, self.product.as_str())
            .with(list::COLUMN_PRIORITY, self.priority)
            .with(list::COLUMN_ANNOTATION, Value::from(self.annotation.clone()))
    }
}

/// A product name remembered from earlier entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: i64,
    pub product: String,
}

impl HistoryEntry {
    /// Reads an entry from a full-projection history row.
    pub fn from_row(row: &RowRef<'_>) -> Result<Self> {
        Ok(Self {
            id: required(row.get_i64(history::COLUMN_ID), history::COLUMN_ID)?,
            product: required(row.get_str(history::COLUMN_PRODUCT), history::COLUMN_PRODUCT)?.to_string(),
        })
    }

    /// Reads every row of a history snapshot.
    pub fn from_cursor(cursor: &Cursor) -> Result<Vec<Self>> {
        cursor.rows().map(|row| Self::from_row(&row)).collect()
    }

    pub fn uri(&self) -> ContentUri {
        Address::HistoryRow(self.id).uri()
    }
}

fn required<T>(value: Option<T>, column: &str) -> Result<T> {
    value.ok_or_else(|| ShopError::invalid_values(column).with_reason("missing from query result"))
}
