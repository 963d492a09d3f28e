//! Display formatting for list entries, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly for the detailed
//! single-entry view. Collections go through newtype wrappers that know how to
//! render an empty collection and which [`Layout`](crate::config::Layout) to
//! use. All output is markdown, so the CLI can render it richly or print it
//! as plain text.
//!
//! # Examples
//!
//! ```rust
//! use shoplist_core::{config::Layout, display::ProductList, models::ProductEntry, Priority};
//!
//! let entries = vec![ProductEntry {
//!     id: 1,
//!     product: "Bread".to_string(),
//!     priority: Priority::High,
//!     annotation: Some("whole grain".to_string()),
//! }];
//!
//! let output = ProductList::new(entries, Layout::Compact).to_string();
//! assert_eq!(output, "- **Bread** _whole grain_\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::{HistoryList, ProductList};
pub use results::{OperationStatus, RemoveResult};
