pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use model::{format_amount, Product};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::CatalogService;
