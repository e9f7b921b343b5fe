// examples/paging_walkthrough.rs

//! Walks a small in-memory catalog page by page, then shows the two kinds of
//! empty listing: an empty catalog and a page past the end.

use catalog::{CatalogError, MemoryProductStore, NewProduct, PageRequest, ProductService};
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> Result<(), CatalogError> {
  tracing_subscriber::fmt().with_max_level(Level::INFO).init();

  let service = ProductService::from_store(MemoryProductStore::new());

  let empty = service.list_products(PageRequest::first()).await?;
  info!(total_count = empty.total_count, total_pages = empty.total_pages, "Empty catalog lists fine.");

  for i in 1..=7 {
    service
      .create_product(&NewProduct {
        name: format!("widget {}", i),
        sku: format!("W-{:03}", i),
        price: 2.5 * f64::from(i),
        quantity: i,
        ..Default::default()
      })
      .await?;
  }

  let mut page_no = 1;
  loop {
    let request = PageRequest::new(Some(page_no), Some(3)).expect("page and size are positive");
    match service.list_products(request).await {
      Ok(page) => {
        let skus: Vec<&str> = page.products.iter().map(|p| p.sku.as_str()).collect();
        info!(page = page.page, of = page.total_pages, ?skus, "Fetched page.");
        page_no += 1;
      }
      Err(CatalogError::OutOfRange { page, .. }) => {
        info!(page, "Walked past the last page.");
        break;
      }
      Err(other) => {
        error!(error = %other, "Listing failed.");
        return Err(other);
      }
    }
  }

  Ok(())
}
