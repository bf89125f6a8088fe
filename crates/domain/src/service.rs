//! Service — one cataloged service with its description and version count.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, ValidationError};
use crate::id::ServiceId;
use crate::time::Timestamp;

/// A persisted service record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub versions: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A service that has not been stored yet.
///
/// The store assigns `id`, `created_at` and `updated_at` on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub versions: u32,
}

impl NewService {
    /// Create a builder for constructing a [`NewService`].
    #[must_use]
    pub fn builder() -> NewServiceBuilder {
        NewServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when `name` is empty or blank.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewService`].
#[derive(Debug, Default)]
pub struct NewServiceBuilder {
    name: Option<String>,
    description: Option<String>,
    versions: Option<u32>,
}

impl NewServiceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn versions(mut self, versions: u32) -> Self {
        self.versions = Some(versions);
        self
    }

    /// Consume the builder, validate, and return a [`NewService`].
    ///
    /// `description` defaults to an empty string and `versions` to `0`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<NewService, CatalogError> {
        let service = NewService {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            versions: self.versions.unwrap_or_default(),
        };
        service.validate()?;
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn should_build_valid_service_when_name_provided() {
        let service = NewService::builder()
            .name("Email Service")
            .description("Manages email templates")
            .versions(1)
            .build()
            .unwrap();
        assert_eq!(service.name, "Email Service");
        assert_eq!(service.description, "Manages email templates");
        assert_eq!(service.versions, 1);
    }

    #[test]
    fn should_default_versions_and_description() {
        let service = NewService::builder().name("Bare").build().unwrap();
        assert_eq!(service.versions, 0);
        assert!(service.description.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_missing() {
        let result = NewService::builder().build();
        assert!(matches!(
            result,
            Err(CatalogError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = NewService::builder().name("   ").build();
        assert!(matches!(
            result,
            Err(CatalogError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_serialize_with_fixed_field_names() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let service = Service {
            id: ServiceId::new(1).unwrap(),
            name: "Payment Gateway".to_string(),
            description: "Processes payments".to_string(),
            versions: 3,
            created_at: ts,
            updated_at: ts,
        };

        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Payment Gateway");
        assert_eq!(value["description"], "Processes payments");
        assert_eq!(value["versions"], 3);
        assert_eq!(value["created_at"], "2024-01-02T03:04:05Z");
        assert_eq!(value["updated_at"], "2024-01-02T03:04:05Z");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }
}
