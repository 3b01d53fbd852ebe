mod company_repository;
mod job_repository;

use thiserror::Error;

use crate::domain::errors::DomainError;

pub use company_repository::CompanyRepository;
pub use job_repository::JobRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
