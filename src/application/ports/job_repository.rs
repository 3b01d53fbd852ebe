use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::application::dto::JobFilter;
use crate::application::ports::RepositoryError;
use crate::domain::changeset::Changeset;
use crate::domain::entities::{Job, NewJob};
use crate::domain::value_objects::{CompanyHandle, JobId};

/// Port for job persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a job and return it with its generated id
    async fn create(&self, job: &NewJob) -> Result<Job, RepositoryError>;

    /// List jobs matching the filter, ordered by title
    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<Job>, RepositoryError>;

    /// Find job by id
    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;

    /// Jobs posted by one company, ordered by id
    async fn find_by_company(&self, handle: &CompanyHandle) -> Result<Vec<Job>, RepositoryError>;

    /// Apply a partial update; `None` when no job has this id
    async fn update(&self, id: JobId, changes: &Changeset) -> Result<Option<Job>, RepositoryError>;

    /// Delete a job; `false` when no job has this id
    async fn delete(&self, id: JobId) -> Result<bool, RepositoryError>;
}
