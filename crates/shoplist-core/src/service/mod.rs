//! Async service over the provider.
//!
//! [`ShoppingList`] is what front ends talk to. Every call runs on tokio's
//! blocking pool with its own [`ShopProvider`], so the calling task never
//! blocks on store I/O. All providers share one [`ChangeNotifier`], which makes
//! writes made through any call visible to every subscriber.
//!
//! ```text
//! ┌─────────────────┐  spawn_blocking  ┌─────────────────┐     ┌───────────┐
//! │  ShoppingList   │─────────────────▶│  ShopProvider   │────▶│  SQLite   │
//! │ (list_ops,      │                  │ (query, insert, │     │           │
//! │  history_ops)   │                  │  update, delete)│     │           │
//! └─────────────────┘                  └─────────────────┘     └───────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use shoplist_core::{params::AddProducts, ShoppingListBuilder};
//!
//! # async fn example() -> shoplist_core::Result<()> {
//! let shop = ShoppingListBuilder::new()
//!     .with_database_path(Some("shop.db"))
//!     .build()
//!     .await?;
//!
//! let added = shop
//!     .add_products(&AddProducts {
//!         names: vec!["Bread".to_string(), "Milk".to_string()],
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{added}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    error::{Result, ShopError},
    notify::{ChangeNotifier, ChangeSubscription},
    provider::ShopProvider,
    uri::ContentUri,
};

pub mod builder;
pub mod history_ops;
pub mod list_ops;

#[cfg(test)]
mod tests;

pub use builder::ShoppingListBuilder;

/// Main interface for managing the shopping list and its history.
#[derive(Debug, Clone)]
pub struct ShoppingList {
    db_path: PathBuf,
    notifier: ChangeNotifier,
}

impl ShoppingList {
    pub(crate) fn new(db_path: PathBuf, notifier: ChangeNotifier) -> Self {
        Self { db_path, notifier }
    }

    /// Location of the store file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Registers an observer for writes affecting `uri`.
    pub fn subscribe(&self, uri: ContentUri, notify_for_descendants: bool) -> ChangeSubscription {
        self.notifier.subscribe(uri, notify_for_descendants)
    }

    /// Runs `op` against a fresh provider on the blocking pool.
    pub async fn with_provider<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut ShopProvider) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let notifier = self.notifier.clone();

        task::spawn_blocking(move || {
            let mut provider = ShopProvider::new(&db_path, notifier);
            op(&mut provider)
        })
        .await
        .map_err(ShopError::join)?
    }
}
