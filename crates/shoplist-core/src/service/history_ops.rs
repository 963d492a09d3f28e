//! History operations for the ShoppingList service.

use super::ShoppingList;
use crate::{
    config::SortOrder,
    contract::{history_uri, list, list_uri, Priority},
    error::Result,
    models::HistoryEntry,
    params::Ids,
    provider::{QueryArgs, Selection, ShopProvider},
    values::ContentValues,
};

impl ShoppingList {
    /// Returns every remembered product, alphabetically.
    pub async fn list_history(&self) -> Result<Vec<HistoryEntry>> {
        self.with_provider(|provider| query_history(provider, Selection::all()))
            .await
    }

    /// Copies history entries back onto the list with default priority.
    ///
    /// Returns how many entries were added; names already on the list are
    /// skipped.
    pub async fn restore_from_history(&self, params: &Ids) -> Result<usize> {
        let ids = params.ids.clone();
        self.with_provider(move |provider| {
            let values: Vec<_> = query_history(provider, Selection::ids(&ids))?
                .into_iter()
                .map(|entry| {
                    ContentValues::new()
                        .with(list::COLUMN_PRODUCT, entry.product)
                        .with(list::COLUMN_PRIORITY, Priority::Default)
                })
                .collect();
            provider.bulk_insert(&list_uri(), &values)
        })
        .await
    }

    /// Forgets individual history entries. Returns how many were removed.
    pub async fn remove_history(&self, params: &Ids) -> Result<usize> {
        let uris: Vec<_> = params
            .ids
            .iter()
            .map(|id| history_uri().with_appended_id(*id))
            .collect();
        self.with_provider(move |provider| provider.delete_batch(&uris))
            .await
    }

    /// Forgets every history entry. The list is kept.
    pub async fn clear_history(&self) -> Result<usize> {
        self.with_provider(|provider| provider.delete(&history_uri(), &Selection::all()))
            .await
    }
}

fn query_history(provider: &mut ShopProvider, selection: Selection) -> Result<Vec<HistoryEntry>> {
    let args = QueryArgs {
        selection,
        sort_order: Some(SortOrder::Alphabetical.order_by()),
        ..QueryArgs::default()
    };
    let cursor = provider.query(&history_uri(), &args)?;
    HistoryEntry::from_cursor(&cursor)
}
