//! Common validation utilities for domain objects
//!
//! Request DTOs use these rules from their `validator::Validate` impls so the
//! create and update paths agree on what a valid job or company looks like.

use crate::domain::errors::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

/// Company handles: lowercase ASCII letters, digits and hyphens
pub static HANDLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").expect("Invalid handle regex"));

/// Validation result type
pub type ValidationResult<T> = Result<T, DomainError>;

/// Common validation utilities
pub struct Validation;

impl Validation {
    pub const MAX_HANDLE_LENGTH: usize = 25;

    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field_name: &str) -> ValidationResult<()> {
        if value.trim().is_empty() {
            return Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: "Field cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Validate string length constraints
    pub fn validate_length(
        value: &str,
        field_name: &str,
        min_length: Option<usize>,
        max_length: Option<usize>,
    ) -> ValidationResult<()> {
        let length = value.chars().count();

        if let Some(min) = min_length {
            if length < min {
                return Err(DomainError::ValidationError {
                    field: field_name.to_string(),
                    message: format!("Field must be at least {} characters long", min),
                });
            }
        }

        if let Some(max) = max_length {
            if length > max {
                return Err(DomainError::ValidationError {
                    field: field_name.to_string(),
                    message: format!("Field must be at most {} characters long", max),
                });
            }
        }

        Ok(())
    }

    /// Validate that a value is within a numeric range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        field_name: &str,
        min: Option<T>,
        max: Option<T>,
    ) -> ValidationResult<()> {
        if let Some(min_val) = min {
            if value < min_val {
                return Err(DomainError::ValidationError {
                    field: field_name.to_string(),
                    message: format!("Value {} is below minimum {}", value, min_val),
                });
            }
        }

        if let Some(max_val) = max {
            if value > max_val {
                return Err(DomainError::ValidationError {
                    field: field_name.to_string(),
                    message: format!("Value {} exceeds maximum {}", value, max_val),
                });
            }
        }

        Ok(())
    }

    /// Equity is a fraction of the company, so it must lie in [0, 1]
    pub fn validate_equity(equity: &Decimal, field_name: &str) -> ValidationResult<()> {
        Self::validate_range(*equity, field_name, Some(Decimal::ZERO), Some(Decimal::ONE))
    }

    /// Validate a company handle
    pub fn validate_handle(handle: &str, field_name: &str) -> ValidationResult<()> {
        Self::validate_length(handle, field_name, Some(1), Some(Self::MAX_HANDLE_LENGTH))?;

        if !HANDLE_REGEX.is_match(handle) {
            return Err(DomainError::ValidationError {
                field: field_name.to_string(),
                message: "Handle can only contain lowercase letters, digits and hyphens"
                    .to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_validate_not_empty() {
        assert!(Validation::validate_not_empty("Doctor", "title").is_ok());
        assert!(Validation::validate_not_empty("", "title").is_err());
        assert!(Validation::validate_not_empty("   ", "title").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(Validation::validate_range(0, "salary", Some(0), None).is_ok());
        assert!(Validation::validate_range(-1, "salary", Some(0), None).is_err());
        assert!(Validation::validate_range(5, "n", None, Some(4)).is_err());
    }

    #[test]
    fn test_validate_equity_bounds() {
        for ok in ["0", "0.091", "0.5", "1", "1.0"] {
            let equity = Decimal::from_str(ok).unwrap();
            assert!(Validation::validate_equity(&equity, "equity").is_ok(), "{ok}");
        }
        for bad in ["-0.1", "1.01", "2"] {
            let equity = Decimal::from_str(bad).unwrap();
            assert!(Validation::validate_equity(&equity, "equity").is_err(), "{bad}");
        }
    }

    #[test]
    fn test_validate_handle() {
        assert!(Validation::validate_handle("bauer-gallagher", "handle").is_ok());
        assert!(Validation::validate_handle("c1", "handle").is_ok());
        assert!(Validation::validate_handle("", "handle").is_err());
        assert!(Validation::validate_handle("Upper", "handle").is_err());
        assert!(Validation::validate_handle("has space", "handle").is_err());
        assert!(Validation::validate_handle(&"a".repeat(26), "handle").is_err());
    }

    #[test]
    fn test_error_carries_field_name() {
        let err = Validation::validate_not_empty("", "title").unwrap_err();
        match err {
            DomainError::ValidationError { field, .. } => assert_eq!(field, "title"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
