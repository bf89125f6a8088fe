//! # catalog-domain
//!
//! Pure domain model for the service catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Service** record (name, description, version count)
//! - Define **search parameters** (page, page size, search term, sort key)
//!   and their validation/defaulting rules
//! - Translate search parameters into a bounded **query specification**
//!   (filter + order + offset/limit) that storage adapters interpret
//! - Define the **page envelope** returned by list queries
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod page;
pub mod query;
pub mod search;
pub mod service;
