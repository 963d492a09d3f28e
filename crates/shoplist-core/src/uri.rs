//! Content URIs and their resolution into typed table/row addresses.
//!
//! A [`ContentUri`] is the free-form `scheme://authority/path` value callers
//! pass around. [`Address::resolve`] turns it into one of the four shapes the
//! provider serves, so the provider itself only ever matches exhaustively on
//! [`Address`].

use std::{fmt, str::FromStr};

use crate::{
    contract::{history, list, AUTHORITY, SCHEME},
    error::{Result, ShopError},
};

/// Hierarchical resource identifier of the form `scheme://authority/seg/...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentUri {
    scheme: String,
    authority: String,
    segments: Vec<String>,
}

impl ContentUri {
    /// Builds a URI under this provider's scheme and authority.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scheme: SCHEME.to_string(),
            authority: AUTHORITY.to_string(),
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// URI naming a whole table.
    pub fn table(name: &str) -> Self {
        Self::new([name])
    }

    /// Returns a copy with `id` appended as a final path segment.
    pub fn with_appended_id(&self, id: i64) -> Self {
        let mut uri = self.clone();
        uri.segments.push(id.to_string());
        uri
    }

    /// Parses a URI string. Only the structural shape is checked here; use
    /// [`Address::resolve`] to check it names something this provider serves.
    pub fn parse(input: &str) -> Result<Self> {
        let unsupported = || ShopError::UnsupportedUri {
            uri: input.to_string(),
        };

        let (scheme, rest) = input.split_once("://").ok_or_else(unsupported)?;
        let mut parts = rest.split('/');
        let authority = parts.next().filter(|a| !a.is_empty()).ok_or_else(unsupported)?;
        if scheme.is_empty() {
            return Err(unsupported());
        }

        Ok(Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            segments: parts.filter(|s| !s.is_empty()).map(String::from).collect(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Path segments, without empty components.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Parses the last path segment as a row id, if it is one.
    pub fn last_id(&self) -> Option<i64> {
        self.segments.last().and_then(|s| parse_id(s))
    }

    /// Canonical spelling of a provider URI, so `list/007` and `list/7` compare
    /// equal. URIs that do not resolve are returned unchanged.
    pub fn canonical(&self) -> ContentUri {
        Address::resolve(self).map_or_else(|_| self.clone(), Address::uri)
    }

    /// True when `other` lies strictly below this URI in the hierarchy.
    pub fn is_ancestor_of(&self, other: &ContentUri) -> bool {
        self.scheme == other.scheme
            && self.authority == other.authority
            && self.segments.len() < other.segments.len()
            && other.segments.starts_with(&self.segments)
    }
}

impl fmt::Display for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for ContentUri {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Row ids are non-negative decimal numbers, nothing else.
fn parse_id(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// The two tables the provider owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    List,
    History,
}

impl Table {
    /// SQL table name and URI path segment.
    pub fn name(self) -> &'static str {
        match self {
            Table::List => list::TABLE,
            Table::History => history::TABLE,
        }
    }

    /// Every column, used when a query has no projection.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::List => list::ALL_COLUMNS,
            Table::History => history::ALL_COLUMNS,
        }
    }

    /// URI of the whole table.
    pub fn uri(self) -> ContentUri {
        ContentUri::table(self.name())
    }
}

/// A resolved provider address: a whole table or one row in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    ListTable,
    ListRow(i64),
    HistoryTable,
    HistoryRow(i64),
}

impl Address {
    /// Resolves a URI against the four known shapes, in order list-table,
    /// list-row, history-table, history-row.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::UnsupportedUri` for any other scheme, authority or
    /// path.
    pub fn resolve(uri: &ContentUri) -> Result<Self> {
        if uri.scheme() != SCHEME || uri.authority() != AUTHORITY {
            return Err(ShopError::UnsupportedUri {
                uri: uri.to_string(),
            });
        }

        let segments: Vec<&str> = uri.segments().iter().map(String::as_str).collect();
        let address = match segments.as_slice() {
            [list::TABLE] => Some(Address::ListTable),
            [list::TABLE, id] => parse_id(id).map(Address::ListRow),
            [history::TABLE] => Some(Address::HistoryTable),
            [history::TABLE, id] => parse_id(id).map(Address::HistoryRow),
            _ => None,
        };

        address.ok_or_else(|| ShopError::UnsupportedUri {
            uri: uri.to_string(),
        })
    }

    /// Table this address points into.
    pub fn table(self) -> Table {
        match self {
            Address::ListTable | Address::ListRow(_) => Table::List,
            Address::HistoryTable | Address::HistoryRow(_) => Table::History,
        }
    }

    /// Row id for single-row addresses.
    pub fn row_id(self) -> Option<i64> {
        match self {
            Address::ListRow(id) | Address::HistoryRow(id) => Some(id),
            Address::ListTable | Address::HistoryTable => None,
        }
    }

    /// Canonical URI for this address.
    pub fn uri(self) -> ContentUri {
        let table = self.table().uri();
        match self.row_id() {
            Some(id) => table.with_appended_id(id),
            None => table,
        }
    }

    /// Address of row `id` in `table`.
    pub fn row(table: Table, id: i64) -> Self {
        match table {
            Table::List => Address::ListRow(id),
            Table::History => Address::HistoryRow(id),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let uri = ContentUri::parse("content://com.shoplist.provider/list/12").unwrap();
        assert_eq!(uri.scheme(), "content");
        assert_eq!(uri.authority(), "com.shoplist.provider");
        assert_eq!(uri.segments(), ["list", "12"]);
        assert_eq!(uri.to_string(), "content://com.shoplist.provider/list/12");
        assert_eq!(uri.last_id(), Some(12));
    }

    #[test]
    fn test_parse_tolerates_trailing_slash() {
        let uri: ContentUri = "content://com.shoplist.provider/history/".parse().unwrap();
        assert_eq!(Address::resolve(&uri).unwrap(), Address::HistoryTable);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(ContentUri::parse("list/1").is_err());
        assert!(ContentUri::parse("content:///list").is_err());
        assert!(ContentUri::parse("://authority/list").is_err());
    }

    #[test]
    fn test_resolve_all_shapes() {
        assert_eq!(Address::resolve(&Table::List.uri()).unwrap(), Address::ListTable);
        assert_eq!(
            Address::resolve(&Table::List.uri().with_appended_id(4)).unwrap(),
            Address::ListRow(4)
        );
        assert_eq!(
            Address::resolve(&Table::History.uri()).unwrap(),
            Address::HistoryTable
        );
        assert_eq!(
            Address::resolve(&Table::History.uri().with_appended_id(9)).unwrap(),
            Address::HistoryRow(9)
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_addresses() {
        for input in [
            "content://com.shoplist.provider/pantry",
            "content://com.shoplist.provider/list/abc",
            "content://com.shoplist.provider/list/-1",
            "content://com.shoplist.provider/list/1/extra",
            "content://com.shoplist.provider",
            "content://other.authority/list",
            "https://com.shoplist.provider/list",
        ] {
            let uri = ContentUri::parse(input).unwrap();
            let err = Address::resolve(&uri).unwrap_err();
            assert!(
                matches!(err, ShopError::UnsupportedUri { .. }),
                "{input} should be unsupported"
            );
        }
    }

    #[test]
    fn test_address_round_trips_through_uri() {
        for address in [
            Address::ListTable,
            Address::ListRow(1),
            Address::HistoryTable,
            Address::HistoryRow(77),
        ] {
            assert_eq!(Address::resolve(&address.uri()).unwrap(), address);
        }
    }

    #[test]
    fn test_ancestry() {
        let table = Table::List.uri();
        let row = table.with_appended_id(3);
        assert!(table.is_ancestor_of(&row));
        assert!(!row.is_ancestor_of(&table));
        assert!(!table.is_ancestor_of(&table));
        assert!(!Table::History.uri().is_ancestor_of(&row));
    }

    #[test]
    fn test_canonical_strips_leading_zeros() {
        let padded = ContentUri::parse("content://com.shoplist.provider/list/007").unwrap();
        assert_eq!(padded.canonical(), Table::List.uri().with_appended_id(7));
        assert_eq!(Table::History.uri().canonical(), Table::History.uri());

        let foreign = ContentUri::table("pantry");
        assert_eq!(foreign.canonical(), foreign);
    }
}
