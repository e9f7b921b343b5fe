// catalog/src/service.rs

//! `ProductService` turns store outcomes into the catalog's error taxonomy and
//! owns the listing policy.

use std::sync::Arc;
use tracing::{event, instrument, Level};

use crate::error::{CatalogError, CatalogResult, StoreError};
use crate::model::{NewProduct, Product, ProductPage, ProductPatch};
use crate::pagination::{compute_total_pages, PageRequest};
use crate::store::{DynProductStore, ProductStore};

/// Stateless; clones share the same store.
#[derive(Clone)]
pub struct ProductService {
  store: DynProductStore,
}

impl ProductService {
  pub fn new(store: DynProductStore) -> Self {
    Self { store }
  }

  pub fn from_store<S>(store: S) -> Self
  where
    S: ProductStore + 'static,
  {
    Self::new(Arc::new(store))
  }

  #[instrument(name = "ProductService::create_product", skip(self, new_product), fields(sku = %new_product.sku), err(Display))]
  pub async fn create_product(&self, new_product: &NewProduct) -> CatalogResult<Product> {
    match self.store.insert(new_product).await {
      Ok(product) => {
        event!(Level::INFO, product_id = product.id, "Product created.");
        Ok(product)
      }
      Err(StoreError::UniqueViolation { .. }) => Err(CatalogError::DuplicateKey {
        sku: new_product.sku.clone(),
      }),
      Err(other) => Err(other.into()),
    }
  }

  #[instrument(name = "ProductService::get_product", skip(self), err(Display))]
  pub async fn get_product(&self, id: i64) -> CatalogResult<Product> {
    match self.store.fetch_by_id(id).await {
      Ok(product) => Ok(product),
      Err(StoreError::NotFound) => Err(CatalogError::NotFound { id }),
      Err(other) => Err(other.into()),
    }
  }

  /// Counts first, then fetches the window. An empty window is only an error
  /// when there is something to list: an empty catalog yields an empty page,
  /// a page past the end of a non-empty catalog yields `OutOfRange`.
  ///
  /// Count and fetch are separate reads; a row inserted in between can make
  /// `total_count` lag the slice by one, which callers tolerate.
  #[instrument(
    name = "ProductService::list_products",
    skip(self),
    fields(page = ?request.page(), size = ?request.size()),
    err(Display)
  )]
  pub async fn list_products(&self, request: PageRequest) -> CatalogResult<ProductPage> {
    let total_count = self.store.count_active().await?;
    let window = request.window();

    let products = self.store.fetch_range(window.offset, window.limit).await?;

    if total_count > 0 && products.is_empty() {
      event!(
        Level::DEBUG,
        total_count,
        offset = window.offset,
        "Window starts past the last active product."
      );
      return Err(CatalogError::OutOfRange {
        page: window.page,
        size: window.limit,
      });
    }

    let total_pages = compute_total_pages(total_count, window.limit);
    event!(
      Level::DEBUG,
      returned = products.len(),
      total_count,
      total_pages,
      "Listed products."
    );

    Ok(ProductPage {
      products,
      page: window.page,
      size: window.limit,
      total_pages,
      total_count,
    })
  }

  #[instrument(name = "ProductService::update_product", skip(self, patch), err(Display))]
  pub async fn update_product(&self, id: i64, patch: &ProductPatch) -> CatalogResult<Product> {
    let mut product = self.get_product(id).await?;

    let changed = patch.apply_to(&mut product);
    event!(Level::DEBUG, ?changed, "Merged patch into stored product.");

    match self.store.save(&product).await {
      Ok(saved) => {
        event!(Level::INFO, product_id = saved.id, "Product updated.");
        Ok(saved)
      }
      Err(StoreError::UniqueViolation { .. }) => Err(CatalogError::DuplicateKey { sku: product.sku }),
      // Deleted between the fetch and the save.
      Err(StoreError::NotFound) => Err(CatalogError::NotFound { id }),
      Err(other) => Err(other.into()),
    }
  }

  /// Relies on the affected-row count rather than a prior fetch, so deleting
  /// an already deleted product is `NotFound`.
  #[instrument(name = "ProductService::delete_product", skip(self), err(Display))]
  pub async fn delete_product(&self, id: i64) -> CatalogResult<()> {
    let rows_affected = self.store.soft_delete(id).await?;
    if rows_affected == 0 {
      return Err(CatalogError::NotFound { id });
    }
    event!(Level::INFO, product_id = id, "Product soft-deleted.");
    Ok(())
  }
}
