// tests/product_lifecycle_tests.rs
mod common;

use catalog::{CatalogError, ProductPatch};
use common::*;
use std::time::Duration;

#[tokio::test]
async fn test_create_then_get_round_trip() {
  setup_tracing();
  let (service, _store) = memory_service();
  let request = new_product("1234");

  let created = service.create_product(&request).await.unwrap();
  let fetched = service.get_product(created.id).await.unwrap();

  assert!(fetched.id > 0);
  assert_eq!(fetched, created);
  assert_eq!(fetched.name, request.name);
  assert_eq!(fetched.description, request.description);
  assert_eq!(fetched.sku, request.sku);
  assert_eq!(fetched.price, request.price);
  assert_eq!(fetched.quantity, request.quantity);
  assert_eq!(fetched.category, request.category);
  assert_eq!(fetched.created_at, fetched.updated_at);
  assert!(fetched.deleted_at.is_none());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
  setup_tracing();
  let (service, _store) = memory_service();

  assert!(matches!(
    service.get_product(99).await,
    Err(CatalogError::NotFound { id: 99 })
  ));
}

#[tokio::test]
async fn test_duplicate_sku_is_rejected_until_holder_is_deleted() {
  setup_tracing();
  let (service, _store) = memory_service();
  let original = service.create_product(&new_product("1234")).await.unwrap();

  match service.create_product(&new_product("1234")).await {
    Err(CatalogError::DuplicateKey { sku }) => assert_eq!(sku, "1234"),
    other => panic!("Expected CatalogError::DuplicateKey, got {:?}", other),
  }

  service.delete_product(original.id).await.unwrap();

  let replacement = service.create_product(&new_product("1234")).await.unwrap();
  assert_ne!(replacement.id, original.id);
}

#[tokio::test]
async fn test_single_field_update_leaves_others_untouched() {
  setup_tracing();
  let (service, _store) = memory_service();
  let created = service.create_product(&new_product("1234")).await.unwrap();

  // Make sure a fresh updated_at is distinguishable.
  tokio::time::sleep(Duration::from_millis(5)).await;

  let patch = ProductPatch {
    price: Some(12.5),
    ..Default::default()
  };
  let updated = service.update_product(created.id, &patch).await.unwrap();

  assert_eq!(updated.price, 12.5);
  assert_eq!(updated.name, created.name);
  assert_eq!(updated.description, created.description);
  assert_eq!(updated.sku, created.sku);
  assert_eq!(updated.quantity, created.quantity);
  assert_eq!(updated.category, created.category);
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);
  assert!(updated.deleted_at.is_none());

  assert_eq!(service.get_product(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_to_taken_sku_is_duplicate() {
  setup_tracing();
  let (service, _store) = memory_service();
  service.create_product(&new_product("a")).await.unwrap();
  let b = service.create_product(&new_product("b")).await.unwrap();

  let patch = ProductPatch {
    sku: Some("a".to_string()),
    ..Default::default()
  };
  match service.update_product(b.id, &patch).await {
    Err(CatalogError::DuplicateKey { sku }) => assert_eq!(sku, "a"),
    other => panic!("Expected CatalogError::DuplicateKey, got {:?}", other),
  }

  // The failed update left the stored row alone.
  assert_eq!(service.get_product(b.id).await.unwrap().sku, "b");
}

#[tokio::test]
async fn test_update_may_take_sku_of_deleted_product() {
  setup_tracing();
  let (service, _store) = memory_service();
  let a = service.create_product(&new_product("a")).await.unwrap();
  let b = service.create_product(&new_product("b")).await.unwrap();
  service.delete_product(a.id).await.unwrap();

  let patch = ProductPatch {
    sku: Some("a".to_string()),
    ..Default::default()
  };
  assert_eq!(service.update_product(b.id, &patch).await.unwrap().sku, "a");
}

#[tokio::test]
async fn test_delete_is_terminal() {
  setup_tracing();
  let (service, _store) = memory_service();
  let created = service.create_product(&new_product("1234")).await.unwrap();

  service.delete_product(created.id).await.unwrap();

  assert!(matches!(
    service.get_product(created.id).await,
    Err(CatalogError::NotFound { .. })
  ));
  assert!(matches!(
    service.delete_product(created.id).await,
    Err(CatalogError::NotFound { .. })
  ));
  assert!(matches!(
    service
      .update_product(created.id, &ProductPatch::default())
      .await,
    Err(CatalogError::NotFound { .. })
  ));
}
