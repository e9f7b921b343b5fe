// catalog_server/src/db/pg_store.rs

use async_trait::async_trait;
use catalog::{NewProduct, Product, ProductStore, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, instrument};

// NUMERIC is read back as FLOAT8 so it maps onto `Product::price`.
const PRODUCT_COLUMNS: &str =
  "id, name, description, sku, price::FLOAT8 AS price, quantity, category, created_at, updated_at, deleted_at";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name: String,
  description: String,
  sku: String,
  price: f64,
  quantity: i32,
  category: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  deleted_at: Option<DateTime<Utc>>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      description: row.description,
      sku: row.sku,
      price: row.price,
      quantity: row.quantity,
      category: row.category,
      created_at: row.created_at,
      updated_at: row.updated_at,
      deleted_at: row.deleted_at,
    }
  }
}

/// Translates a driver error. Unique violations are recognised through the
/// driver's portable check, never through engine error codes.
fn store_error(err: sqlx::Error) -> StoreError {
  if let sqlx::Error::Database(db_err) = &err {
    if db_err.is_unique_violation() {
      return StoreError::UniqueViolation {
        constraint: db_err.constraint().map(str::to_string),
      };
    }
  }
  error!(error = %err, "Product query failed.");
  StoreError::Backend(anyhow::Error::new(err))
}

#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "PgProductStore::insert", skip_all, fields(sku = %new_product.sku))]
  async fn insert(&self, new_product: &NewProduct) -> StoreResult<Product> {
    let sql = format!(
      "INSERT INTO products (name, description, sku, price, quantity, category) \
       VALUES ($1, $2, $3, $4::FLOAT8, $5, $6) RETURNING {}",
      PRODUCT_COLUMNS
    );
    let row: ProductRow = sqlx::query_as(&sql)
      .bind(&new_product.name)
      .bind(&new_product.description)
      .bind(&new_product.sku)
      .bind(new_product.price)
      .bind(new_product.quantity)
      .bind(&new_product.category)
      .fetch_one(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(row.into())
  }

  #[instrument(name = "PgProductStore::fetch_by_id", skip(self))]
  async fn fetch_by_id(&self, id: i64) -> StoreResult<Product> {
    let sql = format!(
      "SELECT {} FROM products WHERE id = $1 AND deleted_at IS NULL",
      PRODUCT_COLUMNS
    );
    let row: Option<ProductRow> = sqlx::query_as(&sql)
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error)?;
    row.map(Product::from).ok_or(StoreError::NotFound)
  }

  #[instrument(name = "PgProductStore::count_active", skip(self))]
  async fn count_active(&self) -> StoreResult<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE deleted_at IS NULL")
      .fetch_one(&self.pool)
      .await
      .map_err(store_error)
  }

  #[instrument(name = "PgProductStore::fetch_range", skip(self))]
  async fn fetch_range(&self, offset: u64, limit: u32) -> StoreResult<Vec<Product>> {
    // An offset beyond i64::MAX addresses no row either way.
    let offset = i64::try_from(offset).unwrap_or(i64::MAX);
    let sql = format!(
      "SELECT {} FROM products WHERE deleted_at IS NULL ORDER BY id ASC OFFSET $1 LIMIT $2",
      PRODUCT_COLUMNS
    );
    let rows: Vec<ProductRow> = sqlx::query_as(&sql)
      .bind(offset)
      .bind(i64::from(limit))
      .fetch_all(&self.pool)
      .await
      .map_err(store_error)?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "PgProductStore::save", skip_all, fields(product_id = product.id))]
  async fn save(&self, product: &Product) -> StoreResult<Product> {
    let sql = format!(
      "UPDATE products SET name = $2, description = $3, sku = $4, price = $5::FLOAT8, \
       quantity = $6, category = $7, updated_at = now() \
       WHERE id = $1 AND deleted_at IS NULL RETURNING {}",
      PRODUCT_COLUMNS
    );
    let row: Option<ProductRow> = sqlx::query_as(&sql)
      .bind(product.id)
      .bind(&product.name)
      .bind(&product.description)
      .bind(&product.sku)
      .bind(product.price)
      .bind(product.quantity)
      .bind(&product.category)
      .fetch_optional(&self.pool)
      .await
      .map_err(store_error)?;
    row.map(Product::from).ok_or(StoreError::NotFound)
  }

  #[instrument(name = "PgProductStore::soft_delete", skip(self))]
  async fn soft_delete(&self, id: i64) -> StoreResult<u64> {
    let result = sqlx::query(
      "UPDATE products SET deleted_at = now(), updated_at = now() WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(id)
    .execute(&self.pool)
    .await
    .map_err(store_error)?;
    Ok(result.rows_affected())
  }
}
