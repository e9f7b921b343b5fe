// catalog/src/model/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  /// Assigned by the store on insert, never reused.
  pub id: i64,
  pub name: String,
  pub description: String,
  pub sku: String,
  pub price: f64,
  pub quantity: i32,
  pub category: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  /// `None` while the product is active. Serialized as `null`.
  pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
  pub fn is_active(&self) -> bool {
    self.deleted_at.is_none()
  }
}
