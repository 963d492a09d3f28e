//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{models::ProductEntry, service::list_ops::AddResult};

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.added.is_empty() {
            writeln!(f, "Added {} product(s):", self.added.len())?;
            writeln!(f)?;
            for entry in &self.added {
                writeln!(f, "- {}. {}", entry.id, entry.product)?;
            }
        }
        if !self.ignored.is_empty() {
            if !self.added.is_empty() {
                writeln!(f)?;
            }
            writeln!(f, "Already on the list: {}", self.ignored.join(", "))?;
        }
        if self.added.is_empty() && self.ignored.is_empty() {
            writeln!(f, "Nothing to add.")?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying removed entries.
pub struct RemoveResult(pub Vec<ProductEntry>);

impl fmt::Display for RemoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching products.");
        }
        writeln!(f, "Removed {} product(s):", self.0.len())?;
        writeln!(f)?;
        for entry in &self.0 {
            writeln!(f, "- {}. {}", entry.id, entry.product)?;
        }
        Ok(())
    }
}

/// Confirmation line for operations that only report a count.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}
