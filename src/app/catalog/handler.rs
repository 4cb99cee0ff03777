//! 商品目录处理器

use axum::{extract::State, response::Json};
use tracing::debug;

use super::model::Product;
use crate::app::router::AppState;

/// GET /api/products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.catalog_service.list_products();
    debug!("返回 {} 个商品", products.len());
    Json(products)
}
