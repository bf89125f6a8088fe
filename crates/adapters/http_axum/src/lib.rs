//! # catalog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only **JSON API**:
//!   - `GET /services` — paginated, searchable, sortable listing
//!   - `GET /services/{id}` — a single service
//!   - `GET /health` — liveness probe
//! - Parse and validate query/path parameters by hand (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `catalog-app` (for port traits and services) and `catalog-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
