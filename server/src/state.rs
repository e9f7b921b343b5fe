// catalog_server/src/state.rs
use catalog::ProductService;

#[derive(Clone)]
pub struct AppState {
  pub product_service: ProductService,
}
