// catalog_server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::{NewProduct, ProductPatch};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::PageParams;

#[instrument(name = "handler::create_product", skip(app_state, req_body), fields(sku = %req_body.sku))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_body: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  info!("Create product");
  let new_product = req_body.into_inner();

  new_product.validate().map_err(AppError::Validation)?;

  let product = app_state.product_service.create_product(&new_product).await?;

  info!(product_id = product.id, "Product created successfully.");
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  info!("Get product");

  let product = app_state.product_service.get_product(product_id).await?;

  info!("Product retrieved successfully.");
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::list_products", skip(app_state, params), fields(page = ?params.0.page(), size = ?params.0.size()))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  params: PageParams,
) -> Result<HttpResponse, AppError> {
  info!("Get products");

  let listing = app_state.product_service.list_products(params.0).await?;

  info!(
    returned = listing.products.len(),
    total_count = listing.total_count,
    "Products listed successfully."
  );
  Ok(HttpResponse::Ok().json(listing))
}

#[instrument(name = "handler::update_product", skip(app_state, path, req_body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req_body: web::Json<ProductPatch>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  info!("Update product");
  let patch = req_body.into_inner();

  patch.validate().map_err(AppError::Validation)?;

  let product = app_state.product_service.update_product(product_id, &patch).await?;

  info!("Product updated successfully.");
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  info!("Delete product");

  app_state.product_service.delete_product(product_id).await?;

  info!("Product deleted successfully.");
  Ok(HttpResponse::NoContent().finish())
}
