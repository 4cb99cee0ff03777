//! 订单数据模型

use serde::{Deserialize, Serialize};

use crate::app::catalog::Product;

pub const ORDER_PLACED_MESSAGE: &str = "Order Placed Successfully!";

/// 下单请求体，客户端发送 `{ "cart": [...] }`
#[derive(Debug, Serialize)]
pub struct OrderRequest<'a> {
    pub cart: &'a [Product],
}

/// 下单确认，内容固定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAcknowledgement {
    pub message: String,
}

impl OrderAcknowledgement {
    pub fn placed() -> Self {
        Self {
            message: ORDER_PLACED_MESSAGE.to_string(),
        }
    }
}
