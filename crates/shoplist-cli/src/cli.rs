//! Command-line argument wrappers.
//!
//! Each wrapper carries the clap attributes for one command and converts into
//! the matching `shoplist_core::params` type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ShoppingList
//! ```
//!
//! Core parameter types stay free of clap derives, so the same service can be
//! driven from tests or another front end.

use clap::{Args, Subcommand, ValueEnum};
use shoplist_core::{params::*, Layout, Priority, SortOrder};

/// Put one or more products on the list
#[derive(Args)]
pub struct AddArgs {
    /// Product names
    #[arg(required = true, help = "Names of the products to add")]
    pub names: Vec<String>,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = PriorityArg::Default,
        help = "Priority for every product added"
    )]
    pub priority: PriorityArg,
    #[arg(short, long, help = "Optional note attached to every product added")]
    pub note: Option<String>,
}

impl From<AddArgs> for AddProducts {
    fn from(val: AddArgs) -> Self {
        AddProducts {
            names: val.names,
            priority: val.priority.into(),
            annotation: val.note,
        }
    }
}

/// Show the list
///
/// Without `--sort` the order saved with `config set-sort` is used.
#[derive(Args)]
pub struct ListArgs {
    #[arg(long, value_enum, help = "Order to show the list in")]
    pub sort: Option<SortOrderArg>,
    #[arg(long, value_enum, help = "How much detail to show")]
    pub layout: Option<LayoutArg>,
}

/// Show one product in detail
#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Identifier of the product to show")]
    pub id: i64,
}

/// Change priority or note of a product
#[derive(Args)]
pub struct EditArgs {
    #[arg(help = "Identifier of the product to edit")]
    pub id: i64,
    #[arg(short, long, value_enum, help = "New priority")]
    pub priority: Option<PriorityArg>,
    #[arg(short, long, conflicts_with = "clear_note", help = "New note")]
    pub note: Option<String>,
    #[arg(long, help = "Remove the note")]
    pub clear_note: bool,
}

impl From<EditArgs> for EditProduct {
    fn from(val: EditArgs) -> Self {
        EditProduct {
            id: val.id,
            priority: val.priority.map(Priority::from),
            annotation: val.note,
            clear_annotation: val.clear_note,
        }
    }
}

/// Take products off the list
#[derive(Args)]
pub struct RemoveArgs {
    #[arg(required = true, help = "Identifiers of the products to remove")]
    pub ids: Vec<i64>,
}

impl From<RemoveArgs> for Ids {
    fn from(val: RemoveArgs) -> Self {
        Ids { ids: val.ids }
    }
}

/// Empty the list or the history
#[derive(Args)]
pub struct ClearArgs {
    /// Confirm the removal (required to prevent accidental clearing)
    #[arg(long)]
    pub confirm: bool,
}

/// Act on one or more history entries
#[derive(Args)]
pub struct HistoryIdsArgs {
    #[arg(required = true, help = "Identifiers of the history entries")]
    pub ids: Vec<i64>,
}

impl From<HistoryIdsArgs> for Ids {
    fn from(val: HistoryIdsArgs) -> Self {
        Ids { ids: val.ids }
    }
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Show every remembered product
    #[command(aliases = ["l", "ls"])]
    List,
    /// Put remembered products back on the list
    #[command(alias = "r")]
    Restore(HistoryIdsArgs),
    /// Forget individual products
    #[command(aliases = ["d", "rm"])]
    Remove(HistoryIdsArgs),
    /// Forget every product
    Clear(ClearArgs),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current preferences
    Show,
    /// Set the default list order
    SetSort {
        #[arg(value_enum)]
        order: SortOrderArg,
    },
    /// Set the default list layout
    SetLayout {
        #[arg(value_enum)]
        layout: LayoutArg,
    },
}

/// Command-line representation of [`Priority`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    High,
    Default,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::High => Priority::High,
            PriorityArg::Default => Priority::Default,
            PriorityArg::Low => Priority::Low,
        }
    }
}

/// Command-line representation of [`SortOrder`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortOrderArg {
    Alphabetical,
    Priority,
}

impl From<SortOrderArg> for SortOrder {
    fn from(val: SortOrderArg) -> Self {
        match val {
            SortOrderArg::Alphabetical => SortOrder::Alphabetical,
            SortOrderArg::Priority => SortOrder::Priority,
        }
    }
}

/// Command-line representation of [`Layout`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Compact,
    Detailed,
}

impl From<LayoutArg> for Layout {
    fn from(val: LayoutArg) -> Self {
        match val {
            LayoutArg::Compact => Layout::Compact,
            LayoutArg::Detailed => Layout::Detailed,
        }
    }
}
