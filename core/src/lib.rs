// src/lib.rs

//! Catalog: the core of a product CRUD service with offset pagination.
//!
//! The crate provides:
//!  - A pure pagination calculator turning optional `page`/`size` input into a
//!    limit/offset window and computing total page counts.
//!  - The `Product` entity with create and partial-update request types.
//!  - The `ProductStore` contract (insert, fetch, count, ordered range, save,
//!    soft delete) and an in-memory implementation of it.
//!  - `ProductService`, which drives a store and translates its outcomes into
//!    `CatalogError` values: `NotFound`, `DuplicateKey`, `OutOfRange` and
//!    `StorageFailure`.
//!
//! HTTP, SQL and process bootstrap live in the server crate.

pub mod error;
pub mod model;
pub mod pagination;
pub mod service;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{CatalogError, CatalogResult, PaginationError, StoreError, StoreResult};
pub use crate::model::{FieldViolations, NewProduct, Product, ProductPage, ProductPatch};
pub use crate::pagination::{
  compute_page_window, compute_total_pages, PageRequest, PageWindow, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
pub use crate::service::ProductService;
pub use crate::store::{DynProductStore, MemoryProductStore, ProductStore};

/*
    Listing flow:
    1. The request handler builds a `PageRequest` (rejecting `page` without `size`).
    2. `ProductService::list_products` asks the store for the active count.
    3. `compute_page_window` yields limit/offset/page.
    4. The store returns the active slice ordered by id.
    5. Non-empty catalog + empty slice => `CatalogError::OutOfRange`.
       Empty catalog + empty slice => an empty `ProductPage`.
    6. `compute_total_pages` fills in `total_pages`.
*/
