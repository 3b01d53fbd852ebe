use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::application::dto::CompanyFilter;
use crate::application::ports::RepositoryError;
use crate::domain::changeset::Changeset;
use crate::domain::entities::Company;
use crate::domain::value_objects::CompanyHandle;

/// Port for company persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a company; a taken handle yields `RepositoryError::Duplicate`
    async fn create(&self, company: &Company) -> Result<Company, RepositoryError>;

    /// List companies matching the filter, ordered by name
    async fn find_all(&self, filter: &CompanyFilter) -> Result<Vec<Company>, RepositoryError>;

    async fn find_by_handle(
        &self,
        handle: &CompanyHandle,
    ) -> Result<Option<Company>, RepositoryError>;

    /// Apply a partial update; `None` when no company has this handle
    async fn update(
        &self,
        handle: &CompanyHandle,
        changes: &Changeset,
    ) -> Result<Option<Company>, RepositoryError>;

    /// Delete a company and, through the foreign key, its jobs
    async fn delete(&self, handle: &CompanyHandle) -> Result<bool, RepositoryError>;
}
