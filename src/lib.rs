//! # 商品目录演示
//!
//! 一个极简的电商演示：
//! - 商品服务：内存中的只读商品表，提供商品列表与下单两个 HTTP 接口
//! - 店面：在终端中渲染商品并维护会话内的购物车

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;
pub mod storefront;

pub use app::{build_router, AppState};
pub use client::CatalogClient;
pub use crate::core::{CoreError, Result};
