//! Storage-specific error type wrapping sqlx errors.

use catalog_domain::error::{CatalogError, ConflictError};

/// Errors originating from the `PostgreSQL` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Map an insert failure, turning a unique violation on `name` into a conflict.
pub(crate) fn insert_error(err: sqlx::Error, name: &str) -> CatalogError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => ConflictError {
            entity: "Service",
            field: "name",
            value: name.to_owned(),
        }
        .into(),
        other => StorageError::from(other).into(),
    }
}
