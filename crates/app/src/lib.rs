//! # catalog-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `ServiceRepository` — count, find, look up and insert services
//! - Define **use-cases**:
//!   - `CatalogService` — paginated search, detail lookup, bootstrap seeding
//! - Provide the built-in seed records
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `catalog-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod seed;
pub mod services;
