//! 商品目录业务服务

use std::sync::Arc;

use super::{
    model::Product,
    repository::{InMemoryProductRepository, ProductRepository},
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.repository.list()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::seeded()))
    }
}
