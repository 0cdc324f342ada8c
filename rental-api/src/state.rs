use std::sync::Arc;
use rental_core::{CatalogService, ProductRepository};
use rental_store::DbClient;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    /// Present when backed by PostgreSQL; used by `/health`.
    pub db: Option<Arc<DbClient>>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(products)),
            db: None,
        }
    }

    pub fn with_db(mut self, db: Arc<DbClient>) -> Self {
        self.db = Some(db);
        self
    }
}
