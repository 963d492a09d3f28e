//! Immutable query snapshots.

use crate::{notify::ChangeEvent, uri::ContentUri, values::Value};

/// Result of a provider query: the rows as they were when the query ran.
///
/// A cursor never changes after it is returned. Holders learn that it is out
/// of date through [`Cursor::is_stale_after`] and re-query.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    notification_uri: ContentUri,
}

impl Cursor {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<Value>>, notification_uri: ContentUri) -> Self {
        Self {
            columns,
            rows,
            notification_uri,
        }
    }

    /// Column names in projection order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of rows in the snapshot.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        self.rows.get(index).map(|values| RowRef {
            cursor: self,
            values,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(move |values| RowRef {
            cursor: self,
            values,
        })
    }

    /// URI the originating query was addressed to.
    pub fn notification_uri(&self) -> &ContentUri {
        &self.notification_uri
    }

    /// True when `event` may have changed what this snapshot would contain.
    pub fn is_stale_after(&self, event: &ChangeEvent) -> bool {
        event.affects(&self.notification_uri, true)
    }
}

/// Borrowed view of one snapshot row.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    cursor: &'a Cursor,
    values: &'a [Value],
}

impl<'a> RowRef<'a> {
    /// Value of `column`, if it is part of the projection.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.cursor
            .column_index(column)
            .and_then(|index| self.values.get(index))
    }

    pub fn get_i64(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(Value::as_i64)
    }

    pub fn get_str(&self, column: &str) -> Option<&'a str> {
        self.get(column).and_then(Value::as_str)
    }

    /// Values in projection order.
    pub fn values(&self) -> &'a [Value] {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uri::Table;

    fn sample() -> Cursor {
        Cursor::new(
            vec!["_id".to_string(), "product".to_string()],
            vec![
                vec![Value::Integer(1), Value::Text("Milk".to_string())],
                vec![Value::Integer(2), Value::Null],
            ],
            Table::List.uri(),
        )
    }

    #[test]
    fn test_row_access_by_column_name() {
        let cursor = sample();
        let first = cursor.row(0).unwrap();
        assert_eq!(first.get_i64("_id"), Some(1));
        assert_eq!(first.get_str("product"), Some("Milk"));
        assert_eq!(first.get("priority"), None);

        let second = cursor.row(1).unwrap();
        assert_eq!(second.get_str("product"), None);
        assert!(second.get("product").unwrap().is_null());
        assert!(cursor.row(2).is_none());
    }

    #[test]
    fn test_staleness_follows_notification_uri() {
        let cursor = sample();
        let row_change = ChangeEvent {
            uri: Table::List.uri().with_appended_id(9),
        };
        let history_change = ChangeEvent {
            uri: Table::History.uri(),
        };
        assert!(cursor.is_stale_after(&row_change));
        assert!(!cursor.is_stale_after(&history_change));
    }
}
