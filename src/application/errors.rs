//! Error type shared by the job and company use cases

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

/// Common error type for job and company use cases
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<DomainError> for UseCaseError {
    fn from(err: DomainError) -> Self {
        UseCaseError::InvalidInput(err.to_string())
    }
}

/// Client-facing repository failures become invalid input;
/// everything else stays a repository (internal) error.
impl From<RepositoryError> for UseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(msg) => UseCaseError::InvalidInput(msg),
            RepositoryError::InvalidInput(e) => UseCaseError::InvalidInput(e.to_string()),
            other => UseCaseError::Repository(other),
        }
    }
}
