//! 订单处理器

use axum::{body::Bytes, extract::State, response::Json};

use super::model::OrderAcknowledgement;
use crate::app::router::AppState;

/// POST /api/order
///
/// 直接读取原始字节，不限制 Content-Type，也不拒绝非法 JSON。
pub async fn submit_order(State(state): State<AppState>, body: Bytes) -> Json<OrderAcknowledgement> {
    Json(state.order_service.place_order(&body))
}
