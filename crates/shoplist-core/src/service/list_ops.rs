//! Shopping list operations for the ShoppingList service.

use log::info;

use super::ShoppingList;
use crate::{
    config::SortOrder,
    contract::{history_uri, list, list_uri},
    error::{Result, ShopError},
    models::ProductEntry,
    params::{AddProducts, EditProduct, Ids, ListProducts},
    provider::{QueryArgs, Selection, ShopProvider},
    uri::Address,
    values::{ContentValues, Value},
};

/// What happened to each name passed to [`ShoppingList::add_products`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddResult {
    /// Entries that were created
    pub added: Vec<ProductEntry>,
    /// Names already on the list
    pub ignored: Vec<String>,
}

impl ShoppingList {
    /// Returns the whole list in the requested order.
    pub async fn list_products(&self, params: &ListProducts) -> Result<Vec<ProductEntry>> {
        let sort_order = params.sort_order;
        self.with_provider(move |provider| query_products(provider, &Selection::all(), sort_order))
            .await
    }

    /// Retrieves one entry by id.
    pub async fn get_product(&self, id: i64) -> Result<Option<ProductEntry>> {
        self.with_provider(move |provider| fetch_product(provider, id))
            .await
    }

    /// Puts new products on the list and remembers their names in history.
    ///
    /// Names already on the list are reported in [`AddResult::ignored`] and
    /// leave the existing entry untouched.
    pub async fn add_products(&self, params: &AddProducts) -> Result<AddResult> {
        let params = params.clone();
        self.with_provider(move |provider| {
            let mut result = AddResult::default();
            for name in &params.names {
                let values = ContentValues::new()
                    .with(list::COLUMN_PRODUCT, name.as_str())
                    .with(list::COLUMN_PRIORITY, params.priority)
                    .with(list::COLUMN_ANNOTATION, Value::from(params.annotation.clone()));

                match provider.insert(&list_uri(), &values)?.row_id() {
                    Some(id) => {
                        provider.insert(
                            &history_uri(),
                            &ContentValues::new().with(list::COLUMN_PRODUCT, name.as_str()),
                        )?;
                        if let Some(entry) = fetch_product(provider, id)? {
                            result.added.push(entry);
                        }
                    }
                    None => result.ignored.push(name.trim().to_string()),
                }
            }
            info!(
                "Added {} product(s), {} already listed",
                result.added.len(),
                result.ignored.len()
            );
            Ok(result)
        })
        .await
    }

    /// Changes priority and/or annotation of one entry.
    ///
    /// Returns the updated entry, or `None` if no entry has this id.
    pub async fn edit_product(&self, params: &EditProduct) -> Result<Option<ProductEntry>> {
        let mut values = ContentValues::new();
        if let Some(priority) = params.priority {
            values.put(list::COLUMN_PRIORITY, priority);
        }
        if params.clear_annotation {
            values.put(list::COLUMN_ANNOTATION, Value::Null);
        } else if let Some(annotation) = &params.annotation {
            values.put(list::COLUMN_ANNOTATION, annotation.as_str());
        }
        if values.is_empty() {
            return Err(ShopError::invalid_values("values")
                .with_reason("specify a priority, an annotation or --clear-note"));
        }

        let id = params.id;
        self.with_provider(move |provider| {
            let changed = provider.update(&Address::ListRow(id).uri(), &values, &Selection::all())?;
            if changed == 0 {
                return Ok(None);
            }
            fetch_product(provider, id)
        })
        .await
    }

    /// Removes entries and returns them, so the removal can be undone with
    /// [`ShoppingList::restore_products`].
    pub async fn remove_products(&self, params: &Ids) -> Result<Vec<ProductEntry>> {
        let ids = params.ids.clone();
        self.with_provider(move |provider| {
            let removed = query_products(provider, &Selection::ids(&ids), SortOrder::default())?;
            let uris: Vec<_> = removed.iter().map(ProductEntry::uri).collect();
            provider.delete_batch(&uris)?;
            Ok(removed)
        })
        .await
    }

    /// Puts previously removed entries back with their original priority and
    /// annotation. Returns how many were restored; names that are on the list
    /// again in the meantime are skipped.
    pub async fn restore_products(&self, entries: &[ProductEntry]) -> Result<usize> {
        let values: Vec<_> = entries.iter().map(ProductEntry::to_values).collect();
        self.with_provider(move |provider| provider.bulk_insert(&list_uri(), &values))
            .await
    }

    /// Empties the list. History is kept.
    pub async fn clear_list(&self) -> Result<usize> {
        self.with_provider(|provider| provider.delete(&list_uri(), &Selection::all()))
            .await
    }

    /// One-line text for a shopping reminder, most urgent products first.
    ///
    /// Returns `None` when the list is empty.
    pub async fn reminder_text(&self) -> Result<Option<String>> {
        let products = self
            .list_products(&ListProducts {
                sort_order: SortOrder::Priority,
            })
            .await?;
        if products.is_empty() {
            return Ok(None);
        }

        let names: Vec<&str> = products.iter().map(|p| p.product.as_str()).collect();
        let noun = if names.len() == 1 { "product" } else { "products" };
        Ok(Some(format!("{} {noun}: {}", names.len(), names.join(", "))))
    }
}

fn query_products(
    provider: &mut ShopProvider,
    selection: &Selection,
    sort_order: SortOrder,
) -> Result<Vec<ProductEntry>> {
    let args = QueryArgs {
        selection: selection.clone(),
        sort_order: Some(sort_order.order_by()),
        ..QueryArgs::default()
    };
    let cursor = provider.query(&list_uri(), &args)?;
    ProductEntry::from_cursor(&cursor)
}

fn fetch_product(provider: &mut ShopProvider, id: i64) -> Result<Option<ProductEntry>> {
    let cursor = provider.query(&Address::ListRow(id).uri(), &QueryArgs::new())?;
    Ok(ProductEntry::from_cursor(&cursor)?.into_iter().next())
}
