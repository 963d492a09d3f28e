//! Filter, projection and ordering arguments for provider calls.

use crate::values::Value;

/// Optional SQL filter with positional `?` placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub clause: Option<String>,
    pub args: Vec<Value>,
}

impl Selection {
    /// No filter: every row of the addressed table (or the addressed row).
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(clause: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            clause: Some(clause.into()),
            args,
        }
    }

    /// Rows whose `_id` is one of `ids`. An empty slice matches nothing.
    pub fn ids(ids: &[i64]) -> Self {
        if ids.is_empty() {
            return Self::new("0", Vec::new());
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        Self::new(
            format!("_id IN ({placeholders})"),
            ids.iter().copied().map(Value::Integer).collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.clause.as_deref().map_or(true, |c| c.trim().is_empty())
    }

    /// Builds the WHERE body, AND-ing an optional row restriction with the
    /// caller's clause.
    pub(crate) fn where_clause(&self, row_id: Option<i64>) -> Option<String> {
        let row = row_id.map(|id| format!("_id = {id}"));
        let user = (!self.is_empty())
            .then(|| self.clause.as_deref())
            .flatten()
            .map(|c| format!("({c})"));

        match (row, user) {
            (Some(row), Some(user)) => Some(format!("{row} AND {user}")),
            (Some(row), None) => Some(row),
            (None, Some(user)) => Some(user),
            (None, None) => None,
        }
    }
}

/// Everything a query needs besides its URI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryArgs {
    /// Columns to return; `None` returns every column of the table.
    pub projection: Option<Vec<String>>,
    pub selection: Selection,
    /// Raw ORDER BY body, e.g. `priority ASC, product COLLATE NOCASE ASC`.
    pub sort_order: Option<String>,
}

impl QueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projection<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn selection(mut self, clause: impl Into<String>, args: Vec<Value>) -> Self {
        self.selection = Selection::new(clause, args);
        self
    }

    pub fn sort_order(mut self, order: impl Into<String>) -> Self {
        self.sort_order = Some(order.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_where_clause_combinations() {
        assert_eq!(Selection::all().where_clause(None), None);
        assert_eq!(
            Selection::all().where_clause(Some(4)).as_deref(),
            Some("_id = 4")
        );

        let filter = Selection::new("priority = ? OR priority = ?", vec![Value::Integer(1), Value::Integer(3)]);
        assert_eq!(
            filter.where_clause(None).as_deref(),
            Some("(priority = ? OR priority = ?)")
        );
        assert_eq!(
            filter.where_clause(Some(2)).as_deref(),
            Some("_id = 2 AND (priority = ? OR priority = ?)")
        );
    }

    #[test]
    fn test_id_selection() {
        let selection = Selection::ids(&[3, 5]);
        assert_eq!(selection.clause.as_deref(), Some("_id IN (?, ?)"));
        assert_eq!(selection.args, vec![Value::Integer(3), Value::Integer(5)]);
        assert_eq!(Selection::ids(&[]).where_clause(None).as_deref(), Some("(0)"));
    }

    #[test]
    fn test_blank_clause_is_empty() {
        assert!(Selection::new("  ", vec![]).is_empty());
        assert!(Selection::all().is_empty());
        assert!(!Selection::new("product = ?", vec!["Milk".into()]).is_empty());
    }
}
