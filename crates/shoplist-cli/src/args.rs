use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddArgs, ClearArgs, ConfigCommands, EditArgs, HistoryCommands, ListArgs, RemoveArgs, ShowArgs,
};

/// Command-line shopping list
///
/// Keeps a list of products to buy and remembers every product you ever
/// entered, so it can be put back on the list later. Running without a
/// command shows the list.
#[derive(Parser)]
#[command(version, about, name = "shoplist")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/shoplist/shoplist.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the preferences file. Defaults to
    /// $XDG_CONFIG_HOME/shoplist/preferences.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Put products on the list
    #[command(alias = "a")]
    Add(AddArgs),
    /// Show the list
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Show one product in detail
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Change priority or note of a product
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Take products off the list
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveArgs),
    /// Empty the list (history is kept)
    Clear(ClearArgs),
    /// Browse and manage previously entered products
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show or change preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print a one-line reminder of what to buy
    Summary,
}
