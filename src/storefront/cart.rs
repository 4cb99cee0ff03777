//! 购物车：会话内的商品快照序列

use crate::app::catalog::Product;

/// 只追加，不合并同一商品，也不持久化
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.entries.push(product);
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
