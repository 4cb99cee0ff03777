//! 店面会话状态
//!
//! 商品列表与购物车只属于当前会话，会话结束即丢弃。

use std::fmt;

use tracing::{error, info};

use super::{cart::Cart, view};
use crate::{app::catalog::Product, client::CatalogClient};

/// 加入购物车后需要用户确认的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub struct Storefront {
    client: CatalogClient,
    products: Vec<Product>,
    cart: Cart,
}

impl Storefront {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            cart: Cart::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// 拉取商品列表；失败只记录错误，保留原有列表，不重试
    pub async fn load_catalog(&mut self) {
        match self.client.list_products().await {
            Ok(products) => {
                info!("已加载 {} 个商品", products.len());
                self.products = products;
            }
            Err(e) => error!("Error fetching data: {}", e),
        }
    }

    pub fn find_product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn add_to_cart(&mut self, product: &Product) -> Notification {
        self.cart.add(product.clone());
        Notification {
            message: format!("{} added to cart!", product.name),
        }
    }

    /// 搜索框尚未接入任何行为
    pub fn search(&mut self, _query: &str) {}

    pub fn render(&self) -> String {
        view::render_page(&self.products, self.cart.len())
    }
}
