// catalog_server/src/main.rs

// Declare modules for the application
mod config;
mod db;
mod errors;
mod state;
mod web;

use crate::config::{AppConfig, LogFormat, StorageBackend};
use crate::errors::Result as AppResult; // Use the app's Result alias
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use catalog::{DynProductStore, MemoryProductStore, ProductService};
use std::sync::Arc;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

/// Picks and prepares the product store named in the configuration.
async fn build_store(config: &AppConfig) -> AppResult<DynProductStore> {
  match config.storage_backend {
    StorageBackend::Postgres => {
      let pool = db::connect(config).await?;
      db::schema::ensure_schema(&pool).await?;
      Ok(Arc::new(db::PgProductStore::new(pool)))
    }
    StorageBackend::Memory => {
      tracing::warn!("Using the in-memory product store; data is lost on shutdown.");
      Ok(Arc::new(MemoryProductStore::new()))
    }
  }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Configuration comes first so it can choose the log format.
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  init_tracing(app_config.log_format);
  tracing::info!(
    backend = ?app_config.storage_backend,
    "Starting product catalog server..."
  );

  let store = match build_store(&app_config).await {
    Ok(store) => store,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialise the product store.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  let app_state = AppState {
    product_service: ProductService::new(store),
  };

  // Configure and Start Actix Web Server
  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
