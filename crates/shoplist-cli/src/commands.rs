//! Command handlers: call the service and render what comes back.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::debug;
use shoplist_core::{
    display::{HistoryList, OperationStatus, ProductList, RemoveResult},
    params::ListProducts,
    Preferences, ShoppingList,
};

use crate::{
    cli::{AddArgs, ConfigCommands, EditArgs, HistoryCommands, ListArgs, RemoveArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    shop: ShoppingList,
    renderer: TerminalRenderer,
    preferences: Preferences,
    config_path: PathBuf,
}

impl Cli {
    pub fn new(
        shop: ShoppingList,
        renderer: TerminalRenderer,
        preferences: Preferences,
        config_path: PathBuf,
    ) -> Self {
        Self {
            shop,
            renderer,
            preferences,
            config_path,
        }
    }

    pub async fn list(&self, args: ListArgs) -> Result<()> {
        let sort_order = args
            .sort
            .map(Into::into)
            .unwrap_or(self.preferences.sort_order);
        let layout = args.layout.map(Into::into).unwrap_or(self.preferences.layout);
        debug!("Listing products by {sort_order} in {layout} layout");

        let products = self
            .shop
            .list_products(&ListProducts { sort_order })
            .await
            .context("Failed to list products")?;
        self.renderer.show(&ProductList::new(products, layout))
    }

    pub async fn add(&self, args: AddArgs) -> Result<()> {
        let result = self
            .shop
            .add_products(&args.into())
            .await
            .context("Failed to add products")?;
        self.renderer.show(&result)
    }

    pub async fn show(&self, id: i64) -> Result<()> {
        match self
            .shop
            .get_product(id)
            .await
            .context("Failed to read product")?
        {
            Some(entry) => self.renderer.show(&entry),
            None => bail!("Product with ID {id} not found"),
        }
    }

    pub async fn edit(&self, args: EditArgs) -> Result<()> {
        let id = args.id;
        match self
            .shop
            .edit_product(&args.into())
            .await
            .context("Failed to edit product")?
        {
            Some(entry) => self.renderer.show(&entry),
            None => bail!("Product with ID {id} not found"),
        }
    }

    pub async fn remove(&self, args: RemoveArgs) -> Result<()> {
        let removed = self
            .shop
            .remove_products(&args.into())
            .await
            .context("Failed to remove products")?;
        self.renderer.show(&RemoveResult(removed))
    }

    pub async fn clear(&self, confirm: bool) -> Result<()> {
        if !confirm {
            bail!("Clearing the list requires --confirm");
        }
        let removed = self
            .shop
            .clear_list()
            .await
            .context("Failed to clear the list")?;
        self.renderer.show(&OperationStatus::success(format!(
            "Removed {removed} product(s) from the list"
        )))
    }

    pub async fn handle_history_command(&self, command: HistoryCommands) -> Result<()> {
        match command {
            HistoryCommands::List => {
                let history = self
                    .shop
                    .list_history()
                    .await
                    .context("Failed to list history")?;
                self.renderer.show(&HistoryList(history))
            }
            HistoryCommands::Restore(args) => {
                let restored = self
                    .shop
                    .restore_from_history(&args.into())
                    .await
                    .context("Failed to restore from history")?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Put {restored} product(s) back on the list"
                )))
            }
            HistoryCommands::Remove(args) => {
                let removed = self
                    .shop
                    .remove_history(&args.into())
                    .await
                    .context("Failed to remove history entries")?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Forgot {removed} product(s)"
                )))
            }
            HistoryCommands::Clear(args) => {
                if !args.confirm {
                    bail!("Clearing the history requires --confirm");
                }
                let removed = self
                    .shop
                    .clear_history()
                    .await
                    .context("Failed to clear history")?;
                self.renderer.show(&OperationStatus::success(format!(
                    "Forgot {removed} product(s)"
                )))
            }
        }
    }

    pub fn handle_config_command(mut self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => {}
            ConfigCommands::SetSort { order } => {
                self.preferences.sort_order = order.into();
                self.save_preferences()?;
            }
            ConfigCommands::SetLayout { layout } => {
                self.preferences.layout = layout.into();
                self.save_preferences()?;
            }
        }
        self.renderer.show(&self.preferences)
    }

    pub async fn summary(&self) -> Result<()> {
        let text = self
            .shop
            .reminder_text()
            .await
            .context("Failed to read the list")?;
        println!("{}", text.as_deref().unwrap_or("Nothing to buy."));
        Ok(())
    }

    fn save_preferences(&self) -> Result<()> {
        self.preferences
            .save(&self.config_path)
            .with_context(|| format!("Failed to save {}", self.config_path.display()))
    }
}
