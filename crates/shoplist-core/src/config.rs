//! User preferences that shape how callers query and present the list.
//!
//! Preferences are an explicit value: load them once, pass them to whatever
//! builds a query or renders output.

use std::{
    fmt,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    contract::{list, COLUMN_PRODUCT},
    error::{Result, ShopError},
};

/// Ordering applied to the shopping list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Case-insensitive by product name
    #[default]
    Alphabetical,
    /// Urgent products first, then by name
    Priority,
}

impl SortOrder {
    /// ORDER BY body for list queries.
    pub fn order_by(self) -> String {
        match self {
            SortOrder::Alphabetical => format!("{COLUMN_PRODUCT} COLLATE NOCASE ASC"),
            SortOrder::Priority => format!(
                "{} ASC, {COLUMN_PRODUCT} COLLATE NOCASE ASC",
                list::COLUMN_PRIORITY
            ),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "alphabetical",
            SortOrder::Priority => "priority",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alphabetical" | "name" => Ok(SortOrder::Alphabetical),
            "priority" => Ok(SortOrder::Priority),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much detail list output shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One line per product
    #[default]
    Compact,
    /// Product with id, priority and annotation
    Detailed,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Compact => "compact",
            Layout::Detailed => "detailed",
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Layout::Compact),
            "detailed" => Ok(Layout::Detailed),
            _ => Err(format!("Invalid layout: {s}")),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub sort_order: SortOrder,
    pub layout: Layout,
}

impl Preferences {
    /// Default preferences file following the XDG Base Directory
    /// specification: `$XDG_CONFIG_HOME/shoplist/preferences.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("shoplist")
            .place_config_file("preferences.json")
            .map_err(|e| ShopError::XdgDirectory(e.to_string()))
    }

    /// Loads preferences from `path`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No preferences at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ShopError::FileSystem {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Writes preferences to `path`, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ShopError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ShopError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}
