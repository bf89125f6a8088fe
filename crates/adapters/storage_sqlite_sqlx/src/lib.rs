//! # catalog-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! Implements the same storage port as the `PostgreSQL` adapter, for
//! single-file deployments, local development and tests.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `catalog-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Translate query specifications into SQL and rows into domain types
//!
//! ## Dependency rule
//! Depends on `catalog-app` (for port traits) and `catalog-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod service_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use service_repo::SqliteServiceRepository;
