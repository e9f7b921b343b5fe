// catalog_server/src/web/extractors.rs

//! Request extractors that reject bad input with an `AppError` before a
//! handler runs.

use actix_web::{dev::Payload, error::JsonPayloadError, error::PathError, web, FromRequest, HttpRequest};
use catalog::{PageRequest, PaginationError};
use tracing::info;

use crate::errors::AppError;

/// Empty counts as absent; anything else must be a positive integer.
fn parse_positive(raw: Option<&str>, invalid: PaginationError) -> Result<Option<u32>, PaginationError> {
  match raw.map(str::trim) {
    None | Some("") => Ok(None),
    Some(value) => match value.parse::<u32>() {
      Ok(n) if n > 0 => Ok(Some(n)),
      _ => Err(invalid),
    },
  }
}

/// `?page=&size=` parsed into a `PageRequest`.
#[derive(Debug, Clone, Copy)]
pub struct PageParams(pub PageRequest);

impl PageParams {
  fn from_query_string(query: &str) -> Result<Self, AppError> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
      .map_err(|e| AppError::BadRequest(format!("invalid query string: {}", e)))?
      .into_inner();
    // A repeated key keeps its first value.
    let first = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str());

    let page = parse_positive(first("page"), PaginationError::InvalidPage)?;
    let size = parse_positive(first("size"), PaginationError::InvalidSize)?;
    Ok(PageParams(PageRequest::new(page, size)?))
  }
}

impl FromRequest for PageParams {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let result = Self::from_query_string(req.query_string());
    if let Err(e) = &result {
      info!(path = %req.path(), error = %e, "Rejected pagination params.");
    }
    futures_util::future::ready(result)
  }
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
  info!(path = %req.path(), error = %err, "Request body could not be unmarshalled.");
  AppError::BadRequest("failed to unmarshal request body".to_string()).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
  info!(path = %req.path(), error = %err, "Product ID was invalid.");
  AppError::BadRequest("invalid product ID".to_string()).into()
}
