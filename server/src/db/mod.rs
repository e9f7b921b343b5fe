// catalog_server/src/db/mod.rs

//! PostgreSQL persistence: pool bootstrap, schema, and the `ProductStore`
//! implementation backed by `sqlx`.

pub mod pg_store;
pub mod schema;


pub use pg_store::PgProductStore;

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

#[instrument(name = "db::connect", skip(config), fields(max_connections = config.db_max_connections), err(Display))]
pub async fn connect(config: &AppConfig) -> AppResult<PgPool> {
  let database_url = config
    .database_url
    .as_deref()
    .ok_or_else(|| AppError::Config("DATABASE_URL is not configured".to_string()))?;

  let pool = PgPoolOptions::new()
    .max_connections(config.db_max_connections)
    .connect(database_url)
    .await?;

  info!("Successfully connected to the database.");
  Ok(pool)
}
