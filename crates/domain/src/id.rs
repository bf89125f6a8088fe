//! Typed identifier newtypes backed by store-assigned integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Service`](crate::service::Service).
///
/// Assigned by the store on insert and never reused. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(i64);

impl ServiceId {
    /// Wrap a raw store value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidServiceId`] when `value` is negative.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::InvalidServiceId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ServiceId {
    type Err = ValidationError;

    /// Accepts plain decimal digits only: no sign, no whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidServiceId(s.to_owned()));
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidServiceId(s.to_owned()))
    }
}
