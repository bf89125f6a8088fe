//! `PostgreSQL` implementation of [`ServiceRepository`].

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Executor, FromRow, PgPool, Postgres, QueryBuilder, Row};

use catalog_app::ports::ServiceRepository;
use catalog_domain::error::{CatalogError, ValidationError};
use catalog_domain::id::ServiceId;
use catalog_domain::query::{ServiceFilter, ServiceQuery, SortOrder};
use catalog_domain::service::{NewService, Service};
use catalog_domain::time::now;

use crate::error::{StorageError, insert_error};

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Service);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Service> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, PgRow> for Wrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let versions: i64 = row.try_get("versions")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

        let id = ServiceId::new(id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let versions = u32::try_from(versions).map_err(|_| {
            sqlx::Error::Decode(Box::new(ValidationError::InvalidVersions(versions)))
        })?;

        Ok(Self(Service {
            id,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            versions,
            created_at,
            updated_at,
        }))
    }
}

const COLUMNS: &str = "id, name, description, versions, created_at, updated_at";

const INSERT: &str = r"
    INSERT INTO services (name, description, versions, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $4)
    RETURNING id, name, description, versions, created_at, updated_at
";

const SELECT_BY_ID: &str =
    "SELECT id, name, description, versions, created_at, updated_at FROM services WHERE id = $1";

/// Append the `WHERE` clause for `filter`, if it restricts anything.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ServiceFilter) {
    if let Some(pattern) = filter.like_pattern() {
        builder
            .push(" WHERE name ILIKE ")
            .push_bind(pattern.clone())
            .push(r" ESCAPE '\' OR description ILIKE ")
            .push_bind(pattern)
            .push(r" ESCAPE '\'");
    }
}

fn order_by(order: SortOrder) -> &'static str {
    match order {
        SortOrder::NameAsc => " ORDER BY name ASC",
        SortOrder::NameDesc => " ORDER BY name DESC",
        SortOrder::CreatedAtDesc => " ORDER BY created_at DESC, id DESC",
    }
}

async fn insert<'e, E>(executor: E, service: &NewService) -> Result<Service, CatalogError>
where
    E: Executor<'e, Database = Postgres>,
{
    let row: Wrapper = sqlx::query_as(INSERT)
        .bind(service.name.clone())
        .bind(service.description.clone())
        .bind(i64::from(service.versions))
        .bind(now())
        .fetch_one(executor)
        .await
        .map_err(|err| insert_error(err, &service.name))?;

    Ok(row.0)
}

/// `PostgreSQL`-backed service repository.
pub struct PostgresServiceRepository {
    pool: PgPool,
}

impl PostgresServiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ServiceRepository for PostgresServiceRepository {
    async fn count(&self, filter: &ServiceFilter) -> Result<u64, CatalogError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM services");
        push_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find(&self, query: &ServiceQuery) -> Result<Vec<Service>, CatalogError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM services"));
        push_filter(&mut builder, &query.filter);
        builder
            .push(order_by(query.order))
            .push(" LIMIT ")
            .push_bind(i64::from(query.limit))
            .push(" OFFSET ")
            .push_bind(i64::try_from(query.offset).unwrap_or(i64::MAX));

        let rows: Vec<Wrapper> = builder
            .build_query_as::<Wrapper>()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn get_by_id(&self, id: ServiceId) -> Result<Option<Service>, CatalogError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn create(&self, service: NewService) -> Result<Service, CatalogError> {
        insert(&self.pool, &service).await
    }

    async fn create_all(&self, services: Vec<NewService>) -> Result<Vec<Service>, CatalogError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let mut created = Vec::with_capacity(services.len());
        for service in &services {
            created.push(insert(&mut *tx, service).await?);
        }

        tx.commit().await.map_err(StorageError::from)?;
        Ok(created)
    }
}
