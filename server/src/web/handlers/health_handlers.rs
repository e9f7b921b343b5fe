// catalog_server/src/web/handlers/health_handlers.rs

use actix_web::HttpResponse;

/// Liveness only; does not touch the store.
pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("OK")
}
