//! 订单业务服务
//!
//! 不做任何校验：无论请求体是什么都记录日志并返回成功。

use serde_json::Value;
use tracing::info;

use super::model::OrderAcknowledgement;

#[derive(Clone, Default)]
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }

    pub fn place_order(&self, payload: &[u8]) -> OrderAcknowledgement {
        info!("Order received for: {}", describe_cart(payload));
        OrderAcknowledgement::placed()
    }
}

/// 提取请求体里的 `cart` 字段用于日志；缺失时为 null，非 JSON 时原样输出
fn describe_cart(payload: &[u8]) -> String {
    match serde_json::from_slice::<Value>(payload) {
        Ok(body) => body.get("cart").cloned().unwrap_or(Value::Null).to_string(),
        Err(_) => String::from_utf8_lossy(payload).into_owned(),
    }
}
