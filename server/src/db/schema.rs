// catalog_server/src/db/schema.rs

use sqlx::PgPool;
use tracing::{info, instrument};

// The unique index is partial so soft-deleted rows release their SKU.
const SCHEMA_STATEMENTS: &[&str] = &[
  r#"
  CREATE TABLE IF NOT EXISTS products (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    sku         VARCHAR(128) NOT NULL,
    price       NUMERIC(10, 2) NOT NULL,
    quantity    INTEGER NOT NULL,
    category    TEXT NOT NULL DEFAULT '',
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    deleted_at  TIMESTAMPTZ
  )
  "#,
  r#"
  CREATE UNIQUE INDEX IF NOT EXISTS products_sku_active_key
    ON products (sku)
    WHERE deleted_at IS NULL
  "#,
  r#"
  CREATE INDEX IF NOT EXISTS idx_products_deleted_at
    ON products (deleted_at)
  "#,
];

/// Creates the products table and its indexes if they do not exist yet.
#[instrument(name = "db::ensure_schema", skip(pool), err(Display))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
  for statement in SCHEMA_STATEMENTS {
    sqlx::query(*statement).execute(pool).await?;
  }
  info!("Database schema is up to date.");
  Ok(())
}
