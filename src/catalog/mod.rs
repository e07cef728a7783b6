pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{CatalogError, ProductRepository};
pub use service::CatalogService;
