//! Builder for creating and configuring ShoppingList instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::ShoppingList;
use crate::{
    db::StoreHelper,
    error::{Result, ShopError},
    notify::ChangeNotifier,
};

/// Builder for creating and configuring ShoppingList instances.
#[derive(Debug, Clone, Default)]
pub struct ShoppingListBuilder {
    database_path: Option<PathBuf>,
    notifier: Option<ChangeNotifier>,
}

impl ShoppingListBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/shoplist/shoplist.db` or
    /// `~/.local/share/shoplist/shoplist.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Shares an existing notifier instead of creating a new one.
    pub fn with_notifier(mut self, notifier: ChangeNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Builds the service, creating or upgrading the store up front so that
    /// open failures surface here rather than on the first call.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::FileSystem` if the database directory cannot be
    /// created and `ShopError::Database` if the store cannot be initialized.
    pub async fn build(self) -> Result<ShoppingList> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ShopError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            StoreHelper::new(&db_path_clone).writable().map(|_| ())
        })
        .await
        .map_err(ShopError::join)??;

        Ok(ShoppingList::new(
            db_path,
            self.notifier.unwrap_or_default(),
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("shoplist")
            .place_data_file("shoplist.db")
            .map_err(|e| ShopError::XdgDirectory(e.to_string()))
    }
}
