// catalog_server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  Postgres,
  Memory,
}

impl FromStr for StorageBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
      "memory" => Ok(StorageBackend::Memory),
      other => Err(AppError::Config(format!("Unknown STORAGE_BACKEND '{}'", other))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Unknown LOG_FORMAT '{}'", other))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage_backend: StorageBackend,
  /// Only present when the backend is postgres.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source. `from_env` passes the process
  /// environment; tests pass a map.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| lookup(var_name).filter(|v| !v.trim().is_empty());

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let storage_backend = get_env("STORAGE_BACKEND")
      .map(|v| v.parse::<StorageBackend>())
      .transpose()?
      .unwrap_or(StorageBackend::Postgres);

    let database_url = match get_env("DATABASE_URL") {
      Some(url) => Some(url),
      None => Self::database_url_from_parts(&get_env),
    };
    if storage_backend == StorageBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "Missing DATABASE_URL (or DB_USER/DB_PASSWORD/DB_NAME) for the postgres backend".to_string(),
      ));
    }

    let db_max_connections = get_env("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|| "5".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;

    let log_format = get_env("LOG_FORMAT")
      .map(|v| v.parse::<LogFormat>())
      .transpose()?
      .unwrap_or(LogFormat::Pretty);

    Ok(Self {
      server_host,
      server_port,
      storage_backend,
      database_url,
      db_max_connections,
      log_format,
    })
  }

  fn database_url_from_parts<G>(get_env: &G) -> Option<String>
  where
    G: Fn(&str) -> Option<String>,
  {
    let user = get_env("DB_USER")?;
    let password = get_env("DB_PASSWORD")?;
    let name = get_env("DB_NAME")?;
    let host = get_env("DB_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = get_env("DB_PORT").unwrap_or_else(|| "5432".to_string());

    Some(format!(
      "postgres://{}:{}@{}:{}/{}?sslmode=disable",
      user, password, host, port, name
    ))
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
