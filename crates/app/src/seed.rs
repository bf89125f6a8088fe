//! Built-in records inserted into an empty catalog at startup.

use catalog_domain::service::NewService;

const DEFAULT_SERVICES: [(&str, &str, u32); 5] = [
    (
        "Authentication Service",
        "Handles user authentication and authorization using JWT tokens",
        2,
    ),
    (
        "Payment Gateway",
        "Processes payments and handles financial transactions",
        3,
    ),
    (
        "Email Service",
        "Manages email templates and handles email delivery",
        1,
    ),
    (
        "Analytics Engine",
        "Collects and processes user behavior data",
        2,
    ),
    (
        "Search Service",
        "Provides full-text search capabilities across multiple data sources",
        4,
    ),
];

/// The five services a fresh catalog starts with, in insertion order.
#[must_use]
pub fn default_services() -> Vec<NewService> {
    DEFAULT_SERVICES
        .iter()
        .map(|(name, description, versions)| NewService {
            name: (*name).to_string(),
            description: (*description).to_string(),
            versions: *versions,
        })
        .collect()
}
