// catalog/src/model/listing.rs

use serde::{Deserialize, Serialize};

use super::Product;

/// One page of active products, ascending by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
  pub products: Vec<Product>,
  pub page: u32,
  pub size: u32,
  pub total_pages: i64,
  pub total_count: i64,
}
