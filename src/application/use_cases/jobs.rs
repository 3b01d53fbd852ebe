use std::sync::Arc;

use crate::application::{
    dto::{CreateJobRequest, JobDto, JobFilter, UpdateJobRequest},
    errors::UseCaseError,
    ports::JobRepository,
};
use crate::domain::{
    entities::NewJob,
    errors::DomainError,
    value_objects::{CompanyHandle, JobId},
};

fn job_not_found(id: JobId) -> UseCaseError {
    UseCaseError::NotFound(format!("No job: {}", id))
}

/// Use case: Create a job
pub struct CreateJobUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl CreateJobUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(&self, request: CreateJobRequest) -> Result<JobDto, UseCaseError> {
        let new_job = NewJob {
            title: request.title,
            salary: request.salary,
            equity: request.equity,
            company_handle: CompanyHandle::new(request.company_handle)?,
        };

        let job = self.job_repo.create(&new_job).await?;
        tracing::info!(job_id = %job.id(), company = %job.company_handle(), "job_created");

        Ok(job.into())
    }
}

/// Use case: List jobs with optional filters
pub struct ListJobsUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl ListJobsUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(&self, filter: JobFilter) -> Result<Vec<JobDto>, UseCaseError> {
        let jobs = self.job_repo.find_all(&filter).await?;
        Ok(jobs.into_iter().map(JobDto::from).collect())
    }
}

/// Use case: Fetch one job
pub struct GetJobUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl GetJobUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(&self, id: JobId) -> Result<JobDto, UseCaseError> {
        self.job_repo
            .find_by_id(id)
            .await?
            .map(JobDto::from)
            .ok_or_else(|| job_not_found(id))
    }
}

/// Use case: Partially update a job
pub struct UpdateJobUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl UpdateJobUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(
        &self,
        id: JobId,
        request: UpdateJobRequest,
    ) -> Result<JobDto, UseCaseError> {
        // An empty payload never reaches the store
        let changes = request.to_changeset();
        if changes.is_empty() {
            return Err(DomainError::NoData.into());
        }

        let job = self
            .job_repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| job_not_found(id))?;
        tracing::info!(job_id = %id, fields = ?changes.field_names(), "job_updated");

        Ok(job.into())
    }
}

/// Use case: Delete a job
pub struct DeleteJobUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl DeleteJobUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(&self, id: JobId) -> Result<(), UseCaseError> {
        if !self.job_repo.delete(id).await? {
            return Err(job_not_found(id));
        }
        tracing::info!(job_id = %id, "job_deleted");
        Ok(())
    }
}
