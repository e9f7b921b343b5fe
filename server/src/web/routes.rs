// catalog_server/src/web/routes.rs

use actix_web::web;

use crate::web::extractors::{json_error_handler, path_error_handler};
use crate::web::handlers::{health_handlers, product_handlers};

// Called from `main.rs` and from the HTTP tests to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .route("/health", web::get().to(health_handlers::health_check_handler))
    .service(
      web::scope("/api/v1") // Base path for API version 1
        .service(
          web::resource("/products")
            .route(web::post().to(product_handlers::create_product_handler))
            .route(web::get().to(product_handlers::list_products_handler)),
        )
        // Non-digit ids do not match and fall through to 404.
        .service(
          web::resource("/products/{product_id:[0-9]+}")
            .route(web::get().to(product_handlers::get_product_handler))
            .route(web::patch().to(product_handlers::update_product_handler))
            .route(web::delete().to(product_handlers::delete_product_handler)),
        ),
    );
}
