//! Checks insert and update payloads against the table layout.

use crate::{
    contract::{list, Priority, COLUMN_ID, COLUMN_PRODUCT},
    error::{Result, ShopError},
    uri::Table,
    values::{ContentValues, Value},
};

/// Column/value pairs ready to bind, in column name order.
pub(crate) type Assignments = Vec<(&'static str, Value)>;

/// Validates a full row for insertion, filling in defaults.
pub(crate) fn insert_values(table: Table, values: &ContentValues) -> Result<Assignments> {
    let mut assignments = assignments(table, values, true)?;

    if !assignments.iter().any(|(c, _)| *c == COLUMN_PRODUCT) {
        return Err(ShopError::invalid_values(COLUMN_PRODUCT).with_reason("a product name is required"));
    }
    if table == Table::List && !assignments.iter().any(|(c, _)| *c == list::COLUMN_PRIORITY) {
        assignments.push((list::COLUMN_PRIORITY, Priority::default().into()));
    }

    Ok(assignments)
}

/// Validates a partial row for an update.
pub(crate) fn update_values(table: Table, values: &ContentValues) -> Result<Assignments> {
    if values.is_empty() {
        return Err(ShopError::invalid_values("values").with_reason("nothing to update"));
    }
    assignments(table, values, false)
}

fn assignments(table: Table, values: &ContentValues, inserting: bool) -> Result<Assignments> {
    values
        .iter()
        .map(|(column, value)| {
            let column = known_column(table, column)?;
            let value = match column {
                COLUMN_ID => row_id(value, inserting)?,
                COLUMN_PRODUCT => product(value)?,
                list::COLUMN_PRIORITY => priority(value)?,
                list::COLUMN_ANNOTATION => annotation(value)?,
                _ => value.clone(),
            };
            Ok((column, value))
        })
        .collect()
}

fn known_column(table: Table, column: &str) -> Result<&'static str> {
    table
        .columns()
        .iter()
        .copied()
        .find(|c| *c == column)
        .ok_or_else(|| {
            ShopError::invalid_values(column)
                .with_reason(format!("unknown column for table '{}'", table.name()))
        })
}

fn row_id(value: &Value, inserting: bool) -> Result<Value> {
    if !inserting {
        return Err(ShopError::invalid_values(COLUMN_ID).with_reason("row ids cannot be changed"));
    }
    match value.as_i64() {
        Some(id) if id > 0 => Ok(Value::Integer(id)),
        _ => Err(ShopError::invalid_values(COLUMN_ID).with_reason("must be a positive integer")),
    }
}

fn product(value: &Value) -> Result<Value> {
    let name = value.as_str().map(str::trim).ok_or_else(|| {
        ShopError::invalid_values(COLUMN_PRODUCT)
            .with_reason(format!("expected text, got {}", value.kind()))
    })?;
    if name.is_empty() {
        return Err(ShopError::invalid_values(COLUMN_PRODUCT).with_reason("must not be empty"));
    }
    Ok(Value::Text(name.to_string()))
}

fn priority(value: &Value) -> Result<Value> {
    value
        .as_i64()
        .and_then(Priority::from_code)
        .map(Value::from)
        .ok_or_else(|| {
            ShopError::invalid_values(list::COLUMN_PRIORITY)
                .with_reason(format!("expected 1, 2 or 3, got {value:?}"))
        })
}

/// Blank annotations are stored as NULL.
fn annotation(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Text(text) if text.trim().is_empty() => Ok(Value::Null),
        Value::Text(text) => Ok(Value::Text(text.clone())),
        other => Err(ShopError::invalid_values(list::COLUMN_ANNOTATION)
            .with_reason(format!("expected text, got {}", other.kind()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_insert_defaults_priority_and_trims_name() {
        let values = ContentValues::new().with("product", "  Bread ");
        let assignments = insert_values(Table::List, &values).unwrap();
        assert_eq!(
            assignments,
            vec![
                ("product", Value::Text("Bread".to_string())),
                ("priority", Value::Integer(2)),
            ]
        );
    }

    #[test]
    fn test_insert_requires_product() {
        let values = ContentValues::new().with("priority", Priority::High);
        let err = insert_values(Table::List, &values).unwrap_err();
        assert!(matches!(err, ShopError::InvalidValues { ref column, .. } if column == "product"));

        let blank = ContentValues::new().with("product", "   ");
        assert!(insert_values(Table::History, &blank).is_err());
    }

    #[test]
    fn test_history_rejects_list_columns() {
        let values = ContentValues::new()
            .with("product", "Milk")
            .with("priority", Priority::Low);
        let err = insert_values(Table::History, &values).unwrap_err();
        assert!(matches!(err, ShopError::InvalidValues { ref column, .. } if column == "priority"));
    }

    #[test]
    fn test_priority_must_be_a_known_code() {
        let values = ContentValues::new()
            .with("product", "Milk")
            .with("priority", 7_i64);
        assert!(insert_values(Table::List, &values).is_err());

        let text = ContentValues::new().with("priority", "high");
        assert!(update_values(Table::List, &text).is_err());
    }

    #[test]
    fn test_update_rules() {
        assert!(update_values(Table::List, &ContentValues::new()).is_err());

        let id = ContentValues::new().with("_id", 3_i64);
        assert!(update_values(Table::List, &id).is_err());

        let blank_note = ContentValues::new().with("annotation", "");
        assert_eq!(
            update_values(Table::List, &blank_note).unwrap(),
            vec![("annotation", Value::Null)]
        );
    }
}
