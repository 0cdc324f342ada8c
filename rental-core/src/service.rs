use std::sync::Arc;

use rental_catalog::{PageRequest, ProductFilter};
use tracing::{debug, error};

use crate::repository::{ProductRepository, RepositoryError};
use crate::views::{product_detail, ProductDetail, ProductList};
use crate::{CoreError, CoreResult};

/// Read-side catalog operations: fetches products through the repository
/// and shapes them into response views.
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Fetch one product. The attribute collection is paginated in memory
    /// after the fetch; pricings are returned in full.
    pub async fn get_product(
        &self,
        product_id: i32,
        attributes_page: PageRequest,
    ) -> CoreResult<ProductDetail> {
        if product_id < 1 {
            return Err(CoreError::ValidationError(format!(
                "product_id must be greater than or equal to 1, got {}",
                product_id
            )));
        }

        let product = self
            .products
            .find_product(product_id)
            .await
            .map_err(store_error)?
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))?;

        let attributes = attributes_page.slice(&product.attributes);
        debug!(
            product_id,
            attributes = attributes.len(),
            of = product.attributes.len(),
            "Fetched product"
        );

        Ok(product_detail(&product, attributes))
    }

    /// List one page of products matching `filter`, with the total count of
    /// distinct matches. Attributes are not paginated here.
    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> CoreResult<ProductList> {
        let result = self
            .products
            .list_products(filter, &page)
            .await
            .map_err(store_error)?;

        debug!(
            region = ?filter.region,
            rental_period = ?filter.rental_period,
            page = page.page(),
            returned = result.products.len(),
            total = result.total,
            "Listed products"
        );

        Ok(ProductList {
            items: result
                .products
                .iter()
                .map(|p| product_detail(p, &p.attributes))
                .collect(),
            total: result.total,
        })
    }
}

fn store_error(err: RepositoryError) -> CoreError {
    error!("Product repository failed: {}", err);
    CoreError::StoreUnavailable(err.to_string())
}
