//! Collection wrapper types for displaying groups of entries.

use std::fmt;

use crate::{
    config::Layout,
    contract::Priority,
    models::{HistoryEntry, ProductEntry},
};

/// The shopping list rendered in a chosen layout.
///
/// Compact output shows one bullet per product, bolding high priority items
/// and italicizing annotations. Detailed output adds ids and priorities.
pub struct ProductList {
    pub entries: Vec<ProductEntry>,
    pub layout: Layout,
}

impl ProductList {
    pub fn new(entries: Vec<ProductEntry>, layout: Layout) -> Self {
        Self { entries, layout }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn write_compact(f: &mut fmt::Formatter<'_>, entry: &ProductEntry) -> fmt::Result {
        match entry.priority {
            Priority::High => write!(f, "- **{}**", entry.product)?,
            Priority::Default | Priority::Low => write!(f, "- {}", entry.product)?,
        }
        if let Some(note) = &entry.annotation {
            write!(f, " _{note}_")?;
        }
        writeln!(f)
    }

    fn write_detailed(f: &mut fmt::Formatter<'_>, entry: &ProductEntry) -> fmt::Result {
        write!(f, "- {}. {} [{}]", entry.id, entry.product, entry.priority)?;
        if let Some(note) = &entry.annotation {
            write!(f, ": {note}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProductList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "The shopping list is empty.");
        }
        for entry in &self.entries {
            match self.layout {
                Layout::Compact => Self::write_compact(f, entry)?,
                Layout::Detailed => Self::write_detailed(f, entry)?,
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the product history.
pub struct HistoryList(pub Vec<HistoryEntry>);

impl HistoryList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for HistoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No history yet.")
        } else {
            for entry in &self.0 {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}
