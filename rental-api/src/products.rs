use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use rental_catalog::{PageRequest, ProductFilter, DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use rental_core::views::{ProductDetail, ProductList};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Query Parameters
// ============================================================================

fn default_page() -> i64 { DEFAULT_PAGE as i64 }
fn default_per_page() -> i64 { DEFAULT_PER_PAGE as i64 }

#[derive(Debug, Deserialize)]
pub struct ProductDetailQuery {
    #[serde(default = "default_page")]
    pub attributes_page: i64,
    #[serde(default = "default_per_page")]
    pub attributes_per_page: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Exact region name, e.g. "Singapore".
    pub region: Option<String>,
    /// Duration in months, e.g. 3, 6 or 12.
    pub rental_period: Option<i64>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

impl ListProductsQuery {
    fn filter(&self) -> ProductFilter {
        let mut filter = ProductFilter::new();
        if let Some(region) = &self.region {
            filter = filter.with_region(region.clone());
        }
        if let Some(months) = self.rental_period {
            filter = filter.with_rental_period(months);
        }
        filter
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{product_id}", get(get_product))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /products/{product_id}
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<ProductDetailQuery>, QueryRejection>,
) -> Result<Json<ProductDetail>, AppError> {
    let Path(product_id) = path.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let Query(query) = query.map_err(|e| AppError::ValidationError(e.body_text()))?;

    if product_id < 1 {
        return Err(AppError::ValidationError(format!(
            "product_id must be greater than or equal to 1, got {}",
            product_id
        )));
    }
    let attributes_page = PageRequest::new(query.attributes_page, query.attributes_per_page, None)?;

    // Ids beyond the column range cannot exist.
    let product_id = i32::try_from(product_id)
        .map_err(|_| AppError::NotFoundError("Product not found".to_string()))?;

    let detail = state.catalog.get_product(product_id, attributes_page).await?;
    Ok(Json(detail))
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<ProductList>, AppError> {
    let Query(query) = query.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let page = PageRequest::new(query.page, query.per_page, Some(MAX_PER_PAGE))?;

    let list = state.catalog.list_products(&query.filter(), page).await?;
    Ok(Json(list))
}
