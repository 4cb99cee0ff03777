//! 商品服务 HTTP 客户端

use crate::{
    app::{
        catalog::Product,
        order::{OrderAcknowledgement, OrderRequest},
    },
    core::Result,
};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/products
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let products = self
            .http
            .get(format!("{}/api/products", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(products)
    }

    /// POST /api/order
    pub async fn submit_order(&self, cart: &[Product]) -> Result<OrderAcknowledgement> {
        let ack = self
            .http
            .post(format!("{}/api/order", self.base_url))
            .json(&OrderRequest { cart })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(ack)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
