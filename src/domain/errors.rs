use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("No data")]
    NoData,

    #[error("Validation error in field '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid job id: {0}")]
    InvalidJobId(String),

    #[error("Invalid company handle: {0}")]
    InvalidCompanyHandle(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}
