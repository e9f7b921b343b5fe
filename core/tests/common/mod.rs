// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use catalog::{MemoryProductStore, NewProduct, Product, ProductService};
use std::sync::Arc;
use tracing::Level;

// --- Service Construction ---
pub fn memory_service() -> (ProductService, Arc<MemoryProductStore>) {
  let store = Arc::new(MemoryProductStore::new());
  (ProductService::new(store.clone()), store)
}

// --- Request Builders ---
pub fn new_product(sku: &str) -> NewProduct {
  NewProduct {
    name: format!("product {}", sku),
    description: format!("this describes product {}", sku),
    sku: sku.to_string(),
    price: 99.99,
    quantity: 1,
    category: "product > subtype".to_string(),
  }
}

/// Inserts `count` products with SKUs `sku-1..=sku-count`.
pub async fn seed(service: &ProductService, count: usize) -> Vec<Product> {
  let mut created = Vec::with_capacity(count);
  for i in 1..=count {
    let product = service
      .create_product(&new_product(&format!("sku-{}", i)))
      .await
      .expect("seeding should not fail");
    created.push(product);
  }
  created
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
