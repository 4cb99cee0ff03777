//! 核心层：错误类型与中间件

pub mod error;
pub mod middleware;

pub use error::{CoreError, Result};
