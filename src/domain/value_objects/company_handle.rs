use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::validation::Validation;

/// Validated company handle (e.g. "bauer-gallagher")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyHandle(String);

impl CompanyHandle {
    pub fn new(value: String) -> Result<Self, DomainError> {
        Validation::validate_handle(&value, "handle")
            .map_err(|e| DomainError::InvalidCompanyHandle(e.to_string()))?;
        Ok(Self(value))
    }

    /// Wrap a handle read back from the database without re-validating it
    pub(crate) fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CompanyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CompanyHandle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}
