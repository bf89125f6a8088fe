//! # catalog-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `catalog-app::ports::storage`
//! - Manage `PostgreSQL` connection pool lifecycle
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
pub use pool::{Config, Database, Target};
pub use service_repo::PostgresServiceRepository;
