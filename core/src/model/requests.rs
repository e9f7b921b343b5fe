// catalog/src/model/requests.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Product;

pub const MAX_SKU_LEN: usize = 128;

/// Field name to the rule it failed, e.g. `"price" => "failed validation on the 'gt' rule"`.
pub type FieldViolations = BTreeMap<String, String>;

fn violation(violations: &mut FieldViolations, field: &str, rule: &str) {
  violations.insert(
    field.to_string(),
    format!("failed validation on the '{}' rule", rule),
  );
}

fn check_name(violations: &mut FieldViolations, name: &str) {
  if name.trim().is_empty() {
    violation(violations, "name", "required");
  }
}

fn check_sku(violations: &mut FieldViolations, sku: &str) {
  if sku.trim().is_empty() {
    violation(violations, "sku", "required");
  } else if sku.chars().count() > MAX_SKU_LEN {
    violation(violations, "sku", "max");
  }
}

fn check_price(violations: &mut FieldViolations, price: f64, required: bool) {
  if required && price == 0.0 {
    violation(violations, "price", "required");
  } else if !(price > 0.0) {
    // also catches NaN
    violation(violations, "price", "gt");
  }
}

fn check_quantity(violations: &mut FieldViolations, quantity: i32) {
  if quantity < 0 {
    violation(violations, "quantity", "min");
  }
}

/// Body of a create call. Missing text fields deserialize as empty so that
/// validation, not parsing, reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub sku: String,
  #[serde(default)]
  pub price: f64,
  #[serde(default)]
  pub quantity: i32,
  #[serde(default)]
  pub category: String,
}

impl NewProduct {
  pub fn validate(&self) -> Result<(), FieldViolations> {
    let mut violations = FieldViolations::new();
    check_name(&mut violations, &self.name);
    check_sku(&mut violations, &self.sku);
    check_price(&mut violations, self.price, true);
    check_quantity(&mut violations, self.quantity);

    if violations.is_empty() {
      Ok(())
    } else {
      Err(violations)
    }
  }
}

/// Body of a partial update. `None` leaves the stored value untouched; a
/// present value replaces it, even when that value is empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sku: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub quantity: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
}

impl ProductPatch {
  /// Only checks fields that are present.
  pub fn validate(&self) -> Result<(), FieldViolations> {
    let mut violations = FieldViolations::new();
    if let Some(name) = &self.name {
      check_name(&mut violations, name);
    }
    if let Some(sku) = &self.sku {
      check_sku(&mut violations, sku);
    }
    if let Some(price) = self.price {
      check_price(&mut violations, price, false);
    }
    if let Some(quantity) = self.quantity {
      check_quantity(&mut violations, quantity);
    }

    if violations.is_empty() {
      Ok(())
    } else {
      Err(violations)
    }
  }

  /// Merges the present fields into `product`. Returns the names of the fields
  /// whose value actually changed.
  pub fn apply_to(&self, product: &mut Product) -> Vec<&'static str> {
    let mut changed = Vec::new();

    fn set<T: PartialEq + Clone>(slot: &mut T, value: &Option<T>, field: &'static str, changed: &mut Vec<&'static str>) {
      if let Some(value) = value {
        if slot != value {
          *slot = value.clone();
          changed.push(field);
        }
      }
    }

    set(&mut product.name, &self.name, "name", &mut changed);
    set(&mut product.description, &self.description, "description", &mut changed);
    set(&mut product.sku, &self.sku, "sku", &mut changed);
    set(&mut product.price, &self.price, "price", &mut changed);
    set(&mut product.quantity, &self.quantity, "quantity", &mut changed);
    set(&mut product.category, &self.category, "category", &mut changed);

    changed
  }
}
