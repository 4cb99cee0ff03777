pub mod handler;
pub mod model;
pub mod service;

pub use model::{OrderAcknowledgement, OrderRequest, ORDER_PLACED_MESSAGE};
pub use service::OrderService;
