pub mod repository;
pub mod views;
pub mod service;
pub mod memory;

pub use repository::{ProductPage, ProductRepository, RepositoryError};
pub use service::CatalogService;
pub use memory::InMemoryProductRepository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<rental_catalog::PageError> for CoreError {
    fn from(err: rental_catalog::PageError) -> Self {
        CoreError::ValidationError(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
