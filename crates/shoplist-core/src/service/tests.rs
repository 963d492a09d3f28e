//! Tests for the service module.

use super::*;
use crate::{
    config::SortOrder,
    contract::{history_uri, list_uri, Priority},
    notify::ChangeNotifier,
    params::{AddProducts, EditProduct, Ids, ListProducts},
    ShopError,
};
use tempfile::TempDir;

/// Helper function to create a test service
async fn create_test_shop() -> (TempDir, ShoppingList) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let shop = ShoppingListBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create shopping list");
    (temp_dir, shop)
}

fn add(names: &[&str]) -> AddProducts {
    AddProducts {
        names: names.iter().map(|n| n.to_string()).collect(),
        ..Default::default()
    }
}

fn names(products: &[crate::models::ProductEntry]) -> Vec<&str> {
    products.iter().map(|p| p.product.as_str()).collect()
}

#[tokio::test]
async fn test_build_creates_store_file() {
    let (temp_dir, shop) = create_test_shop().await;
    assert!(temp_dir.path().join("test.db").exists());
    assert_eq!(shop.database_path(), temp_dir.path().join("test.db"));
}

#[tokio::test]
async fn test_build_creates_missing_directories() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("a").join("b").join("shop.db");
    ShoppingListBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create shopping list");
    assert!(db_path.exists());
}

#[tokio::test]
async fn test_add_products_mirrors_history() {
    let (_temp_dir, shop) = create_test_shop().await;

    let result = shop
        .add_products(&AddProducts {
            names: vec!["Bread".to_string(), " Milk ".to_string()],
            priority: Priority::High,
            annotation: Some("today".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(names(&result.added), ["Bread", "Milk"]);
    assert!(result.ignored.is_empty());
    assert!(result.added.iter().all(|p| p.priority == Priority::High));
    assert!(result
        .added
        .iter()
        .all(|p| p.annotation.as_deref() == Some("today")));

    let history = shop.list_history().await.unwrap();
    let history_names: Vec<_> = history.iter().map(|h| h.product.as_str()).collect();
    assert_eq!(history_names, ["Bread", "Milk"]);
}

#[tokio::test]
async fn test_add_existing_product_is_reported_as_ignored() {
    let (_temp_dir, shop) = create_test_shop().await;
    shop.add_products(&add(&["Milk"])).await.unwrap();

    let result = shop.add_products(&add(&["Milk", "Eggs"])).await.unwrap();

    assert_eq!(names(&result.added), ["Eggs"]);
    assert_eq!(result.ignored, ["Milk"]);
    assert_eq!(
        shop.list_products(&ListProducts::default()).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn test_list_products_sort_orders() {
    let (_temp_dir, shop) = create_test_shop().await;
    shop.add_products(&add(&["carrots", "Apples"])).await.unwrap();
    shop.add_products(&AddProducts {
        names: vec!["Zucchini".to_string()],
        priority: Priority::High,
        annotation: None,
    })
    .await
    .unwrap();

    let alphabetical = shop
        .list_products(&ListProducts {
            sort_order: SortOrder::Alphabetical,
        })
        .await
        .unwrap();
    assert_eq!(names(&alphabetical), ["Apples", "carrots", "Zucchini"]);

    let by_priority = shop
        .list_products(&ListProducts {
            sort_order: SortOrder::Priority,
        })
        .await
        .unwrap();
    assert_eq!(names(&by_priority), ["Zucchini", "Apples", "carrots"]);
}

#[tokio::test]
async fn test_edit_product() {
    let (_temp_dir, shop) = create_test_shop().await;
    let added = shop.add_products(&add(&["Bread", "Milk"])).await.unwrap();
    let bread = &added.added[0];

    let edited = shop
        .edit_product(&EditProduct {
            id: bread.id,
            priority: Some(Priority::Low),
            annotation: Some("whole grain".to_string()),
            clear_annotation: false,
        })
        .await
        .unwrap()
        .expect("entry should exist");
    assert_eq!(edited.priority, Priority::Low);
    assert_eq!(edited.annotation.as_deref(), Some("whole grain"));

    let cleared = shop
        .edit_product(&EditProduct {
            id: bread.id,
            clear_annotation: true,
            ..Default::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.annotation, None);
    assert_eq!(cleared.priority, Priority::Low);

    let milk = shop.get_product(added.added[1].id).await.unwrap().unwrap();
    assert_eq!(milk, added.added[1]);
}

#[tokio::test]
async fn test_edit_missing_or_empty() {
    let (_temp_dir, shop) = create_test_shop().await;

    let missing = shop
        .edit_product(&EditProduct {
            id: 404,
            priority: Some(Priority::High),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(missing.is_none());

    let err = shop
        .edit_product(&EditProduct {
            id: 1,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ShopError::InvalidValues { .. }));
}

#[tokio::test]
async fn test_remove_and_undo() {
    let (_temp_dir, shop) = create_test_shop().await;
    let added = shop
        .add_products(&AddProducts {
            names: vec!["Cheese".to_string(), "Wine".to_string()],
            priority: Priority::High,
            annotation: Some("for friday".to_string()),
        })
        .await
        .unwrap();
    let cheese_id = added.added[0].id;

    let removed = shop
        .remove_products(&Ids {
            ids: vec![cheese_id, 9999],
        })
        .await
        .unwrap();
    assert_eq!(names(&removed), ["Cheese"]);
    assert!(shop.get_product(cheese_id).await.unwrap().is_none());

    let restored = shop.restore_products(&removed).await.unwrap();
    assert_eq!(restored, 1);

    let list = shop.list_products(&ListProducts::default()).await.unwrap();
    let cheese = list.iter().find(|p| p.product == "Cheese").unwrap();
    assert_eq!(cheese.priority, Priority::High);
    assert_eq!(cheese.annotation.as_deref(), Some("for friday"));
}

#[tokio::test]
async fn test_clear_list_keeps_history() {
    let (_temp_dir, shop) = create_test_shop().await;
    shop.add_products(&add(&["A", "B", "C"])).await.unwrap();

    assert_eq!(shop.clear_list().await.unwrap(), 3);
    assert!(shop
        .list_products(&ListProducts::default())
        .await
        .unwrap()
        .is_empty());
    assert_eq!(shop.list_history().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_restore_from_history() {
    let (_temp_dir, shop) = create_test_shop().await;
    shop.add_products(&AddProducts {
        names: vec!["Tea".to_string(), "Honey".to_string()],
        priority: Priority::Low,
        annotation: None,
    })
    .await
    .unwrap();
    shop.clear_list().await.unwrap();
    shop.add_products(&add(&["Honey"])).await.unwrap();

    let ids: Vec<i64> = shop
        .list_history()
        .await
        .unwrap()
        .iter()
        .map(|h| h.id)
        .collect();
    let restored = shop.restore_from_history(&Ids { ids }).await.unwrap();
    assert_eq!(restored, 1);

    let list = shop.list_products(&ListProducts::default()).await.unwrap();
    let tea = list.iter().find(|p| p.product == "Tea").unwrap();
    assert_eq!(tea.priority, Priority::Default);
}

#[tokio::test]
async fn test_history_removal() {
    let (_temp_dir, shop) = create_test_shop().await;
    shop.add_products(&add(&["A", "B", "C"])).await.unwrap();
    let history = shop.list_history().await.unwrap();

    let removed = shop
        .remove_history(&Ids {
            ids: vec![history[0].id, history[1].id],
        })
        .await
        .unwrap();
    assert_eq!(removed, 2);
    assert_eq!(shop.list_history().await.unwrap().len(), 1);

    assert_eq!(shop.clear_history().await.unwrap(), 1);
    assert!(shop.list_history().await.unwrap().is_empty());
    assert_eq!(
        shop.list_products(&ListProducts::default()).await.unwrap().len(),
        3
    );
}

#[tokio::test]
async fn test_reminder_text() {
    let (_temp_dir, shop) = create_test_shop().await;
    assert_eq!(shop.reminder_text().await.unwrap(), None);

    shop.add_products(&add(&["Milk"])).await.unwrap();
    assert_eq!(
        shop.reminder_text().await.unwrap().as_deref(),
        Some("1 product: Milk")
    );

    shop.add_products(&AddProducts {
        names: vec!["Bread".to_string()],
        priority: Priority::High,
        annotation: None,
    })
    .await
    .unwrap();
    assert_eq!(
        shop.reminder_text().await.unwrap().as_deref(),
        Some("2 products: Bread, Milk")
    );
}

#[tokio::test]
async fn test_subscribers_see_writes_from_any_call() {
    let (_temp_dir, shop) = create_test_shop().await;
    let mut sub = shop.subscribe(list_uri(), true);

    shop.add_products(&add(&["Milk"])).await.unwrap();
    shop.clear_list().await.unwrap();

    let first = sub.recv().await.unwrap();
    assert!(list_uri().is_ancestor_of(&first.uri));
    let second = sub.recv().await.unwrap();
    assert_eq!(second.uri, list_uri());
    assert!(sub.try_recv().is_none());
}

#[tokio::test]
async fn test_concurrent_duplicate_adds_leave_one_row() {
    let (_temp_dir, shop) = create_test_shop().await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shop = shop.clone();
            tokio::spawn(async move { shop.add_products(&add(&["Coffee"])).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        created += handle.await.unwrap().unwrap().added.len();
    }

    assert_eq!(created, 1);
    assert_eq!(
        shop.list_products(&ListProducts::default()).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_shared_notifier_reaches_outside_observers() {
    let temp_dir = TempDir::new().unwrap();
    let notifier = ChangeNotifier::new();
    let mut sub = notifier.subscribe(history_uri(), true);

    let shop = ShoppingListBuilder::new()
        .with_database_path(Some(temp_dir.path().join("shared.db")))
        .with_notifier(notifier.clone())
        .build()
        .await
        .expect("Failed to create shopping list");
    shop.add_products(&add(&["Milk"])).await.unwrap();

    let event = sub.recv().await.expect("history mirror should be announced");
    assert!(history_uri().is_ancestor_of(&event.uri));
}
