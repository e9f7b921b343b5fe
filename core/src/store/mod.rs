// catalog/src/store/mod.rs

//! The storage contract the service is written against.
//!
//! Implementations own all mutable state and their own concurrency control.
//! In particular, SKU uniqueness among active products must be enforced
//! atomically by the store at insert/save time.

pub mod memory;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::StoreResult;
use crate::model::{NewProduct, Product};

pub use memory::MemoryProductStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Persists a new active product, assigning its id and timestamps.
  /// Fails with `StoreError::UniqueViolation` when an active product holds the SKU.
  async fn insert(&self, new_product: &NewProduct) -> StoreResult<Product>;

  /// Fails with `StoreError::NotFound` unless an active product has `id`.
  async fn fetch_by_id(&self, id: i64) -> StoreResult<Product>;

  /// Number of active products.
  async fn count_active(&self) -> StoreResult<i64>;

  /// Active products ascending by id, skipping `offset`, at most `limit`.
  async fn fetch_range(&self, offset: u64, limit: u32) -> StoreResult<Vec<Product>>;

  /// Writes every mutable field of `product` and bumps `updated_at`.
  /// Fails with `StoreError::UniqueViolation` on an SKU collision and with
  /// `StoreError::NotFound` if the product is no longer active.
  async fn save(&self, product: &Product) -> StoreResult<Product>;

  /// Marks the product deleted. Returns the number of rows affected, which is
  /// zero when no active product has `id`.
  async fn soft_delete(&self, id: i64) -> StoreResult<u64>;
}

pub type DynProductStore = Arc<dyn ProductStore>;
