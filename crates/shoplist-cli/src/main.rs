//! Shoplist CLI Application
//!
//! Command-line front end for the shoplist shopping-list manager.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::ListArgs;
use commands::Cli;
use log::info;
use renderer::TerminalRenderer;
use shoplist_core::{Preferences, ShoppingListBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        config_file,
        no_color,
        command,
    } = Args::parse();

    let config_path = match config_file {
        Some(path) => path,
        None => Preferences::default_path().context("Failed to locate preferences file")?,
    };
    let preferences = Preferences::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let shop = ShoppingListBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize shopping list")?;

    info!("Shoplist started on {}", shop.database_path().display());

    let cli = Cli::new(
        shop,
        TerminalRenderer::new(!no_color),
        preferences,
        config_path,
    );

    match command {
        Some(Add(args)) => cli.add(args).await,
        Some(List(args)) => cli.list(args).await,
        Some(Show(args)) => cli.show(args.id).await,
        Some(Edit(args)) => cli.edit(args).await,
        Some(Remove(args)) => cli.remove(args).await,
        Some(Clear(args)) => cli.clear(args.confirm).await,
        Some(History { command }) => cli.handle_history_command(command).await,
        Some(Config { command }) => cli.handle_config_command(command),
        Some(Summary) => cli.summary().await,
        None => {
            cli.list(ListArgs {
                sort: None,
                layout: None,
            })
            .await
        }
    }
}
