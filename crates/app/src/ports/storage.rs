//! Storage port — repository trait for persisted services.

use std::future::Future;

use catalog_domain::error::CatalogError;
use catalog_domain::id::ServiceId;
use catalog_domain::query::{ServiceFilter, ServiceQuery};
use catalog_domain::service::{NewService, Service};

/// Repository for querying (and bootstrapping) [`Service`] records.
///
/// Implementations must be safe to call concurrently from many requests.
pub trait ServiceRepository {
    /// Count records matching `filter`, ignoring pagination.
    fn count(
        &self,
        filter: &ServiceFilter,
    ) -> impl Future<Output = Result<u64, CatalogError>> + Send;

    /// Fetch the filtered, ordered, bounded records described by `query`.
    fn find(
        &self,
        query: &ServiceQuery,
    ) -> impl Future<Output = Result<Vec<Service>, CatalogError>> + Send;

    /// Get a service by its unique identifier.
    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, CatalogError>> + Send;

    /// Insert a new service, letting the store assign id and timestamps.
    ///
    /// Fails with [`CatalogError::Conflict`] when the name is taken.
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<Service, CatalogError>> + Send;

    /// Insert every service in `services`, in order, as one unit.
    ///
    /// Either all records are stored or none are: a failure on any of them
    /// (e.g. [`CatalogError::Conflict`]) leaves the store unchanged.
    fn create_all(
        &self,
        services: Vec<NewService>,
    ) -> impl Future<Output = Result<Vec<Service>, CatalogError>> + Send;
}
