use std::sync::Arc;

use crate::application::{
    dto::{CompanyDetailDto, CompanyDto, CompanyFilter, CreateCompanyRequest, UpdateCompanyRequest},
    errors::UseCaseError,
    ports::{CompanyRepository, JobRepository, RepositoryError},
};
use crate::domain::{
    entities::{Company, CompanyWithJobs},
    errors::DomainError,
    value_objects::CompanyHandle,
};

fn company_not_found(handle: &CompanyHandle) -> UseCaseError {
    UseCaseError::NotFound(format!("No company: {}", handle))
}

/// Use case: Create a company
pub struct CreateCompanyUseCase {
    company_repo: Arc<dyn CompanyRepository>,
}

impl CreateCompanyUseCase {
    pub fn new(company_repo: Arc<dyn CompanyRepository>) -> Self {
        Self { company_repo }
    }

    pub async fn execute(&self, request: CreateCompanyRequest) -> Result<CompanyDto, UseCaseError> {
        let handle = CompanyHandle::new(request.handle)?;
        let company = Company::new(
            handle.clone(),
            request.name,
            request.description,
            request.num_employees,
            request.logo_url,
        );

        let created = match self.company_repo.create(&company).await {
            Ok(created) => created,
            Err(RepositoryError::Duplicate(_)) => {
                return Err(UseCaseError::InvalidInput(format!(
                    "Duplicate company: {}",
                    handle
                )))
            }
            Err(e) => return Err(e.into()),
        };
        tracing::info!(company = %handle, "company_created");

        Ok(created.into())
    }
}

/// Use case: List companies with optional filters
pub struct ListCompaniesUseCase {
    company_repo: Arc<dyn CompanyRepository>,
}

impl ListCompaniesUseCase {
    pub fn new(company_repo: Arc<dyn CompanyRepository>) -> Self {
        Self { company_repo }
    }

    pub async fn execute(&self, filter: CompanyFilter) -> Result<Vec<CompanyDto>, UseCaseError> {
        if let (Some(min), Some(max)) = (filter.min_employees, filter.max_employees) {
            if min > max {
                return Err(DomainError::InvalidFilter(
                    "minEmployees cannot be greater than maxEmployees".to_string(),
                )
                .into());
            }
        }

        let companies = self.company_repo.find_all(&filter).await?;
        Ok(companies.into_iter().map(CompanyDto::from).collect())
    }
}

/// Use case: Fetch one company with its jobs
pub struct GetCompanyUseCase {
    company_repo: Arc<dyn CompanyRepository>,
    job_repo: Arc<dyn JobRepository>,
}

impl GetCompanyUseCase {
    pub fn new(company_repo: Arc<dyn CompanyRepository>, job_repo: Arc<dyn JobRepository>) -> Self {
        Self {
            company_repo,
            job_repo,
        }
    }

    pub async fn execute(&self, handle: &CompanyHandle) -> Result<CompanyDetailDto, UseCaseError> {
        let company = self
            .company_repo
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| company_not_found(handle))?;
        let jobs = self.job_repo.find_by_company(handle).await?;

        Ok(CompanyWithJobs { company, jobs }.into())
    }
}

/// Use case: Partially update a company
pub struct UpdateCompanyUseCase {
    company_repo: Arc<dyn CompanyRepository>,
}

impl UpdateCompanyUseCase {
    pub fn new(company_repo: Arc<dyn CompanyRepository>) -> Self {
        Self { company_repo }
    }

    pub async fn execute(
        &self,
        handle: &CompanyHandle,
        request: UpdateCompanyRequest,
    ) -> Result<CompanyDto, UseCaseError> {
        let changes = request.to_changeset();
        if changes.is_empty() {
            return Err(DomainError::NoData.into());
        }

        let company = self
            .company_repo
            .update(handle, &changes)
            .await?
            .ok_or_else(|| company_not_found(handle))?;
        tracing::info!(company = %handle, fields = ?changes.field_names(), "company_updated");

        Ok(company.into())
    }
}

/// Use case: Delete a company
pub struct DeleteCompanyUseCase {
    company_repo: Arc<dyn CompanyRepository>,
}

impl DeleteCompanyUseCase {
    pub fn new(company_repo: Arc<dyn CompanyRepository>) -> Self {
        Self { company_repo }
    }

    pub async fn execute(&self, handle: &CompanyHandle) -> Result<(), UseCaseError> {
        if !self.company_repo.delete(handle).await? {
            return Err(company_not_found(handle));
        }
        tracing::info!(company = %handle, "company_deleted");
        Ok(())
    }
}
