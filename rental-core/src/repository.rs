use async_trait::async_trait;
use rental_catalog::{PageRequest, Product, ProductFilter};

pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// One page of fully loaded products plus the count of all matches.
#[derive(Debug, Clone, Default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Distinct products matching the filter, ignoring pagination.
    pub total: u64,
}

/// Repository trait for product catalog access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Load one product with all attributes, values and pricings.
    async fn find_product(
        &self,
        id: i32,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Load the requested page of products matching `filter`, ordered by id.
    /// Each product appears at most once regardless of how many of its
    /// pricing rows match.
    async fn list_products(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<ProductPage, RepositoryError>;
}
