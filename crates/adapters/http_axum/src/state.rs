//! Shared application state for axum handlers.

use std::sync::Arc;

use catalog_app::ports::ServiceRepository;
use catalog_app::services::catalog_service::CatalogService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Catalog use-cases.
    pub catalog_service: Arc<CatalogService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
        }
    }
}

impl<R> AppState<R>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(catalog_service: CatalogService<R>) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
        }
    }
}
