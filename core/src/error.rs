// catalog/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Outcomes of a `ProductService` call that are not a success.
///
/// Every variant is terminal at this layer. The request-handling layer maps
/// each one to its own response code.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("product not found: {id}")]
  NotFound { id: i64 },

  #[error("product with this SKU already exists: {sku}")]
  DuplicateKey { sku: String },

  #[error("page number out of range (page {page}, size {size})")]
  OutOfRange { page: u32, size: u32 },

  /// Storage details stay behind `source` so they can be logged without being
  /// rendered to callers.
  #[error("storage operation failed")]
  StorageFailure {
    #[source]
    source: AnyhowError,
  },
}

/// Errors reported by a `ProductStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
  /// An active product already holds the SKU being written.
  #[error("unique constraint violated ({constraint:?})")]
  UniqueViolation { constraint: Option<String> },

  #[error("no active product matched")]
  NotFound,

  #[error("storage backend error: {0}")]
  Backend(#[source] AnyhowError),
}

impl From<StoreError> for CatalogError {
  fn from(err: StoreError) -> Self {
    // UniqueViolation and NotFound need the caller's id/sku; anything that
    // reaches this blanket conversion is treated as opaque.
    match err {
      StoreError::Backend(source) => CatalogError::StorageFailure { source },
      other => CatalogError::StorageFailure {
        source: AnyhowError::new(other),
      },
    }
  }
}

/// Rejected pagination input. Raised while building a `PageRequest`, before
/// the service is involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
  #[error("invalid page param")]
  InvalidPage,

  #[error("invalid size param")]
  InvalidSize,

  #[error("must specify size if page is included")]
  PageWithoutSize,
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;
