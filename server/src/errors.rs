// catalog_server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use catalog::{CatalogError, FieldViolations, PaginationError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Malformed input the handler rejected before calling the service.
  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Validation Error: {0:?}")]
  Validation(FieldViolations),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error(transparent)]
  Catalog(#[from] CatalogError),
}

impl From<PaginationError> for AppError {
  fn from(err: PaginationError) -> Self {
    AppError::BadRequest(err.to_string())
  }
}

/// Walks `source()` so storage details end up in the log line.
fn error_chain(err: &dyn std::error::Error) -> String {
  let mut chain = err.to_string();
  let mut current = err.source();
  while let Some(cause) = current {
    chain.push_str(": ");
    chain.push_str(&cause.to_string());
    current = cause.source();
  }
  chain
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
      AppError::Catalog(CatalogError::DuplicateKey { .. }) => StatusCode::CONFLICT,
      AppError::Catalog(CatalogError::OutOfRange { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::Catalog(CatalogError::StorageFailure { .. })
      | AppError::Config(_)
      | AppError::Sqlx(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %error_chain(self), "Responding with error");
    } else {
      tracing::info!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }

    let mut builder = HttpResponse::build(status);
    match self {
      AppError::BadRequest(m) => builder.json(json!({"error": m})),
      AppError::Validation(violations) => builder.json(violations),
      AppError::Catalog(CatalogError::NotFound { .. }) => builder.json(json!({"error": "product not found"})),
      AppError::Catalog(err @ CatalogError::DuplicateKey { .. }) => builder.json(json!({"error": err.to_string()})),
      AppError::Catalog(err @ CatalogError::OutOfRange { .. }) => builder.json(json!({"error": err.to_string()})),
      // Storage and configuration details stay in the log.
      _ => builder.json(json!({"error": "unexpected error occurred"})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;

  #[test]
  fn catalog_errors_map_to_distinct_statuses() {
    let cases = [
      (CatalogError::NotFound { id: 1 }, StatusCode::NOT_FOUND),
      (CatalogError::DuplicateKey { sku: "1234".to_string() }, StatusCode::CONFLICT),
      (CatalogError::OutOfRange { page: 9, size: 10 }, StatusCode::UNPROCESSABLE_ENTITY),
      (
        CatalogError::StorageFailure {
          source: anyhow::anyhow!("relation \"products\" does not exist"),
        },
        StatusCode::INTERNAL_SERVER_ERROR,
      ),
    ];
    for (err, status) in cases {
      assert_eq!(AppError::from(err).status_code(), status);
    }
  }

  #[actix_rt::test]
  async fn storage_details_are_not_sent_to_clients() {
    let err = AppError::from(CatalogError::StorageFailure {
      source: anyhow::anyhow!("relation \"products\" does not exist"),
    });
    let body = to_bytes(err.error_response().into_body()).await.unwrap();
    let text = std::str::from_utf8(&body).unwrap();
    assert!(text.contains("unexpected error occurred"));
    assert!(!text.contains("products"));
  }

  #[test]
  fn pagination_errors_are_bad_requests() {
    let err = AppError::from(PaginationError::PageWithoutSize);
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Bad Request: must specify size if page is included");
  }
}
