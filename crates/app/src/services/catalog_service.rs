//! Catalog service — use-cases for browsing the service catalog.

use catalog_domain::error::{CatalogError, NotFoundError};
use catalog_domain::id::ServiceId;
use catalog_domain::page::ServicePage;
use catalog_domain::query::ServiceFilter;
use catalog_domain::search::SearchParams;
use catalog_domain::service::{NewService, Service};

use crate::ports::ServiceRepository;

/// Application service for the read-only catalog.
pub struct CatalogService<R> {
    repo: R,
}

impl<R: ServiceRepository> CatalogService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List one page of services matching `params`.
    ///
    /// The total is counted before the page is fetched; the two reads are
    /// independent, so `total` can lag behind concurrent inserts.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self, params: SearchParams) -> Result<ServicePage, CatalogError> {
        let query = params.to_query();
        tracing::debug!(?query, "listing services");

        let total = self.repo.count(&query.filter).await?;
        let services = self.repo.find(&query).await?;

        Ok(ServicePage::new(&params, total, services))
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no service with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_service(&self, id: ServiceId) -> Result<Service, CatalogError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Insert `services` in order, but only when the catalog is empty.
    ///
    /// Every record is validated up front and the batch is stored as one
    /// unit, so a failed seed leaves the catalog empty and the next start
    /// tries again. Returns the number of inserted records (`0` when data
    /// already exists).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for an invalid record,
    /// [`CatalogError::Conflict`] for a duplicate name, or a storage error.
    pub async fn seed_if_empty(&self, services: Vec<NewService>) -> Result<usize, CatalogError> {
        let existing = self.repo.count(&ServiceFilter::all()).await?;
        if existing > 0 {
            tracing::debug!(existing, "catalog already populated, skipping seed");
            return Ok(0);
        }

        for service in &services {
            service.validate()?;
        }
        let created = self.repo.create_all(services).await?;
        Ok(created.len())
    }
}
