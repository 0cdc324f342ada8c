use async_trait::async_trait;
use rental_catalog::{PageRequest, Product, ProductFilter};

use crate::repository::{ProductPage, ProductRepository, RepositoryError};

/// Product repository over an owned, immutable product list.
///
/// Applies the same filter, ordering and paging rules as the database
/// repository, which makes it a stand-in for the store in tests and demos.
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|p| p.id);
        products.dedup_by_key(|p| p.id);
        Self { products }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_product(
        &self,
        id: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_products(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<ProductPage, RepositoryError> {
        let matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect();

        Ok(ProductPage {
            total: matching.len() as u64,
            products: page.slice(&matching).iter().map(|p| (*p).clone()).collect(),
        })
    }
}
