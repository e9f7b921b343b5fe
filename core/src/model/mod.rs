// catalog/src/model/mod.rs

//! Product entity, the request shapes that create and modify it, and the
//! listing result returned by the service.

pub mod listing;
pub mod product;
pub mod requests;

pub use listing::ProductPage;
pub use product::Product;
pub use requests::{FieldViolations, NewProduct, ProductPatch};
