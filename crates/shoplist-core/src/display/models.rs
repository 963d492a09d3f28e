//! Display implementations for domain models.

use std::fmt;

use crate::{
    config::Preferences,
    models::{HistoryEntry, ProductEntry},
};

impl fmt::Display for ProductEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.product)?;
        writeln!(f)?;
        writeln!(f, "- Priority: {}", self.priority)?;
        if let Some(note) = &self.annotation {
            writeln!(f, "- Note: {note}")?;
        }
        Ok(())
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}. {}", self.id, self.product)
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Preferences")?;
        writeln!(f)?;
        writeln!(f, "- Sort order: {}", self.sort_order)?;
        writeln!(f, "- Layout: {}", self.layout)
    }
}
