//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CatalogError`] via `#[from]`.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("conflict: {0}")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Malformed or out-of-range input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("versions must be between 0 and {max}, got {0}", max = u32::MAX)]
    InvalidVersions(i64),

    #[error("page must be an integer greater than or equal to 1, got {0:?}")]
    InvalidPage(String),

    #[error("page_size must be an integer between 1 and 100, got {0:?}")]
    InvalidPageSize(String),

    #[error("sort_by must be one of \"name\" or \"-name\", got {0:?}")]
    InvalidSortKey(String),

    #[error("invalid service id {0:?}")]
    InvalidServiceId(String),
}

/// A lookup targeted a record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// An insert collided with a uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with {field} {value:?} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub field: &'static str,
    pub value: String,
}
