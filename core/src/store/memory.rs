// catalog/src/store/memory.rs

//! A `ProductStore` that keeps rows in process memory.
//!
//! Rows are never removed; soft-deleted rows stay in the map with
//! `deleted_at` set, mirroring what a relational backend does.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{event, Level};

use crate::error::{StoreError, StoreResult};
use crate::model::{NewProduct, Product};

use super::ProductStore;

const SKU_CONSTRAINT: &str = "products_sku_active_key";

#[derive(Debug, Default)]
struct Rows {
  // BTreeMap keeps id order for range queries.
  by_id: BTreeMap<i64, Product>,
  last_id: i64,
}

impl Rows {
  fn sku_taken(&self, sku: &str, except_id: Option<i64>) -> bool {
    self
      .by_id
      .values()
      .any(|p| p.is_active() && p.sku == sku && Some(p.id) != except_id)
  }
}

#[derive(Debug, Default)]
pub struct MemoryProductStore {
  rows: RwLock<Rows>,
}

impl MemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Every row ever inserted, deleted ones included.
  pub fn total_rows(&self) -> usize {
    self.rows.read().by_id.len()
  }
}

fn unique_violation() -> StoreError {
  StoreError::UniqueViolation {
    constraint: Some(SKU_CONSTRAINT.to_string()),
  }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
  async fn insert(&self, new_product: &NewProduct) -> StoreResult<Product> {
    let mut rows = self.rows.write();
    if rows.sku_taken(&new_product.sku, None) {
      event!(Level::DEBUG, sku = %new_product.sku, "Insert rejected, SKU held by an active product.");
      return Err(unique_violation());
    }

    rows.last_id += 1;
    let now = Utc::now();
    let product = Product {
      id: rows.last_id,
      name: new_product.name.clone(),
      description: new_product.description.clone(),
      sku: new_product.sku.clone(),
      price: new_product.price,
      quantity: new_product.quantity,
      category: new_product.category.clone(),
      created_at: now,
      updated_at: now,
      deleted_at: None,
    };
    rows.by_id.insert(product.id, product.clone());
    Ok(product)
  }

  async fn fetch_by_id(&self, id: i64) -> StoreResult<Product> {
    self
      .rows
      .read()
      .by_id
      .get(&id)
      .filter(|p| p.is_active())
      .cloned()
      .ok_or(StoreError::NotFound)
  }

  async fn count_active(&self) -> StoreResult<i64> {
    let count = self.rows.read().by_id.values().filter(|p| p.is_active()).count();
    i64::try_from(count).map_err(|e| StoreError::Backend(e.into()))
  }

  async fn fetch_range(&self, offset: u64, limit: u32) -> StoreResult<Vec<Product>> {
    // Offsets past usize::MAX cannot address any row.
    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let take = usize::try_from(limit).unwrap_or(usize::MAX);

    Ok(
      self
        .rows
        .read()
        .by_id
        .values()
        .filter(|p| p.is_active())
        .skip(skip)
        .take(take)
        .cloned()
        .collect(),
    )
  }

  async fn save(&self, product: &Product) -> StoreResult<Product> {
    let mut rows = self.rows.write();
    // A missing row wins over a SKU collision, as an UPDATE ... WHERE would.
    if !rows.by_id.get(&product.id).is_some_and(|p| p.is_active()) {
      return Err(StoreError::NotFound);
    }
    if rows.sku_taken(&product.sku, Some(product.id)) {
      event!(Level::DEBUG, id = product.id, sku = %product.sku, "Save rejected, SKU held by another active product.");
      return Err(unique_violation());
    }

    let stored = rows
      .by_id
      .get_mut(&product.id)
      .filter(|p| p.is_active())
      .ok_or(StoreError::NotFound)?;

    stored.name = product.name.clone();
    stored.description = product.description.clone();
    stored.sku = product.sku.clone();
    stored.price = product.price;
    stored.quantity = product.quantity;
    stored.category = product.category.clone();
    stored.updated_at = Utc::now();

    Ok(stored.clone())
  }

  async fn soft_delete(&self, id: i64) -> StoreResult<u64> {
    let mut rows = self.rows.write();
    match rows.by_id.get_mut(&id).filter(|p| p.is_active()) {
      Some(product) => {
        let now = Utc::now();
        product.deleted_at = Some(now);
        product.updated_at = now;
        Ok(1)
      }
      None => Ok(0),
    }
  }
}
