//! 商品仓储
//!
//! 目录数据只在进程启动时加载一次，之后不再修改。
//! 持久化实现只需实现 [`ProductRepository`]，内存实现依旧可用于测试。

use super::model::Product;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// 商品仓储 trait
pub trait ProductRepository: Send + Sync {
    /// 按插入顺序返回全部商品
    fn list(&self) -> Vec<Product>;
}

/// 内存只读商品表
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 默认的四条示例商品
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "iPhone 15 Pro", 999.0, PLACEHOLDER_IMAGE, 4.5),
            Product::new(2, "Sony WH-1000XM5", 348.0, PLACEHOLDER_IMAGE, 4.8),
            Product::new(3, "MacBook Air M2", 1199.0, PLACEHOLDER_IMAGE, 4.9),
            Product::new(4, "Nike Air Jordan", 150.0, PLACEHOLDER_IMAGE, 4.2),
        ])
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self) -> Vec<Product> {
        self.products.clone()
    }
}
