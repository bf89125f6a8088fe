//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::get;

use catalog_app::ports::ServiceRepository;

use crate::state::AppState;

/// Build the catalog API router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ServiceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/services", get(services::list::<R>))
        .route("/services/{id}", get(services::get::<R>))
}
