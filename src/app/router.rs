//! 路由与共享状态

use std::time::Duration;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::{
    catalog::{self, CatalogService},
    order::{self, OrderService},
};
use crate::{core::middleware::request_logging_middleware, infrastructure::config::HttpConfig};

#[derive(Clone, Default)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub order_service: OrderService,
}

impl AppState {
    pub fn new(catalog_service: CatalogService, order_service: OrderService) -> Self {
        Self {
            catalog_service,
            order_service,
        }
    }
}

/// 构建应用路由
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/api/products", get(catalog::handler::list_products))
        .route("/api/order", post(order::handler::submit_order))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&http.allowed_origins))
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
        .with_state(state)
}

/// 未配置来源时允许任意跨域访问
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
