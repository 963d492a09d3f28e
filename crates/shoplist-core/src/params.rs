//! Parameter structures for shopping-list operations.
//!
//! These are interface-agnostic: the CLI converts its clap arguments into them
//! and any other front end can do the same.

use serde::{Deserialize, Serialize};

use crate::{config::SortOrder, contract::Priority};

/// Products to put on the list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddProducts {
    /// Names to add; each becomes its own entry
    pub names: Vec<String>,
    /// Priority applied to every new entry
    #[serde(default)]
    pub priority: Priority,
    /// Annotation applied to every new entry
    pub annotation: Option<String>,
}

/// Changes to one list entry. Fields left as `None` are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditProduct {
    pub id: i64,
    pub priority: Option<Priority>,
    pub annotation: Option<String>,
    /// Removes the annotation; wins over `annotation`
    #[serde(default)]
    pub clear_annotation: bool,
}

/// Parameters for listing the shopping list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListProducts {
    pub sort_order: SortOrder,
}

/// Generic parameters for operations on several rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ids {
    pub ids: Vec<i64>,
}
