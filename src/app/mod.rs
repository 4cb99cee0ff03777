//! 应用层：商品目录与订单

pub mod catalog;
pub mod order;
pub mod router;

pub use router::{build_router, AppState};
