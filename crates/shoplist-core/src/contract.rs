//! Shared vocabulary of the data layer: tables, columns, URIs and priorities.
//!
//! Every other module names tables and columns through these constants. The
//! authority and table names are fixed for the lifetime of a build; any
//! incompatible schema change bumps [`SCHEMA_VERSION`], which makes the
//! storage wrapper drop and recreate both tables.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::uri::ContentUri;

/// URI scheme used for every address handled by the provider.
pub const SCHEME: &str = "content";

/// Authority identifying this provider.
pub const AUTHORITY: &str = "com.shoplist.provider";

/// Current schema version stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 2;

/// Primary key column shared by both tables.
pub const COLUMN_ID: &str = "_id";

/// Product name column shared by both tables.
pub const COLUMN_PRODUCT: &str = "product";

/// Columns and path of the current shopping list.
pub mod list {
    /// Table name, also the URI path segment.
    pub const TABLE: &str = "list";
    pub const COLUMN_ID: &str = super::COLUMN_ID;
    pub const COLUMN_PRODUCT: &str = super::COLUMN_PRODUCT;
    pub const COLUMN_PRIORITY: &str = "priority";
    pub const COLUMN_ANNOTATION: &str = "annotation";

    /// Every column in table order.
    pub const ALL_COLUMNS: &[&str] = &[COLUMN_ID, COLUMN_PRODUCT, COLUMN_PRIORITY, COLUMN_ANNOTATION];
}

/// Columns and path of the product history.
pub mod history {
    /// Table name, also the URI path segment.
    pub const TABLE: &str = "history";
    pub const COLUMN_ID: &str = super::COLUMN_ID;
    pub const COLUMN_PRODUCT: &str = super::COLUMN_PRODUCT;

    /// Every column in table order.
    pub const ALL_COLUMNS: &[&str] = &[COLUMN_ID, COLUMN_PRODUCT];
}

/// Content URI of the whole list table.
pub fn list_uri() -> ContentUri {
    ContentUri::table(list::TABLE)
}

/// Content URI of the whole history table.
pub fn history_uri() -> ContentUri {
    ContentUri::table(history::TABLE)
}

/// Type-safe enumeration of product priorities.
///
/// The integer codes are what the `priority` column stores; lower sorts
/// first, so an ascending sort puts urgent products on top.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Default,
    Low,
}

impl Priority {
    /// Every priority in ascending code order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Default, Priority::Low];

    /// Integer code stored in the database.
    pub fn code(self) -> i64 {
        match self {
            Priority::High => 1,
            Priority::Default => 2,
            Priority::Low => 3,
        }
    }

    /// Looks up the priority for a stored code.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Lowercase name used in text interfaces.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Default => "default",
            Priority::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" | "1" => Ok(Priority::High),
            "default" | "normal" | "2" => Ok(Priority::Default),
            "low" | "3" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
