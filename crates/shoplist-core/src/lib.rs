//! Core library for the shoplist shopping-list manager.
//!
//! The crate is the data layer behind a shopping list and its product history.
//! Both tables live in one SQLite file and are reached only through a
//! URI-addressed provider:
//!
//! - [`contract`]: table, column and URI vocabulary plus [`Priority`]
//! - [`db`]: lazily opened store with destructive schema upgrades
//! - [`provider`]: query/insert/update/delete/bulk operations with
//!   conflict-ignore inserts
//! - [`notify`]: change notification keyed by URI
//! - [`service`]: async [`ShoppingList`] front end used by the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use shoplist_core::{params::AddProducts, params::ListProducts, ShoppingListBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let shop = ShoppingListBuilder::new()
//!     .with_database_path(Some("shop.db"))
//!     .build()
//!     .await?;
//!
//! shop.add_products(&AddProducts {
//!     names: vec!["Bread".to_string()],
//!     ..Default::default()
//! })
//! .await?;
//!
//! for product in shop.list_products(&ListProducts::default()).await? {
//!     println!("{}", product.product);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contract;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod params;
pub mod provider;
pub mod service;
pub mod uri;
pub mod values;

// Re-export commonly used types
pub use config::{Layout, Preferences, SortOrder};
pub use contract::Priority;
pub use db::StoreHelper;
pub use error::{Result, ShopError};
pub use models::{HistoryEntry, ProductEntry};
pub use notify::{ChangeEvent, ChangeNotifier, ChangeSubscription};
pub use provider::{Cursor, InsertOutcome, QueryArgs, Selection, ShopProvider};
pub use service::{list_ops::AddResult, ShoppingList, ShoppingListBuilder};
pub use uri::{Address, ContentUri, Table};
pub use values::{ContentValues, Value};
