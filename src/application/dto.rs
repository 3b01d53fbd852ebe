use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::domain::{
    changeset::Changeset,
    entities::{Company, CompanyWithJobs, Job},
    errors::DomainError,
    validation::{Validation, HANDLE_REGEX},
};

/// Distinguish an explicit `null` from an absent field in PATCH bodies.
///
/// Used together with `#[serde(default)]`: absent -> `None`,
/// `null` -> `Some(None)`, value -> `Some(Some(value))`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Record a failed domain rule against a request field
fn push_error(errors: &mut ValidationErrors, field: &'static str, result: Result<(), DomainError>) {
    if let Err(err) = result {
        let message = match err {
            DomainError::ValidationError { message, .. } => message,
            other => other.to_string(),
        };
        let mut error = ValidationError::new("invalid");
        error.message = Some(Cow::Owned(message));
        errors.add(field, error);
    }
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

/// DTO for job responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    /// Exact decimal, serialized as a string such as `"0.091"`
    #[schema(value_type = Option<String>, example = "0.091")]
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id().as_i32(),
            title: job.title().to_string(),
            salary: job.salary(),
            equity: job.equity(),
            company_handle: job.company_handle().to_string(),
        }
    }
}

/// DTO for a job listed under its company (no handle repeated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyJobDto {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    #[schema(value_type = Option<String>, example = "0.5")]
    pub equity: Option<Decimal>,
}

impl From<Job> for CompanyJobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id().as_i32(),
            title: job.title().to_string(),
            salary: job.salary(),
            equity: job.equity(),
        }
    }
}

/// DTO for job creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateJobRequest {
    pub title: String,
    pub salary: Option<i32>,
    #[schema(value_type = Option<String>, example = "0.5")]
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl Validate for CreateJobRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        push_error(&mut errors, "title", Validation::validate_not_empty(&self.title, "title"));
        if let Some(salary) = self.salary {
            push_error(
                &mut errors,
                "salary",
                Validation::validate_range(salary, "salary", Some(0), None),
            );
        }
        if let Some(equity) = &self.equity {
            push_error(&mut errors, "equity", Validation::validate_equity(equity, "equity"));
        }
        push_error(
            &mut errors,
            "companyHandle",
            Validation::validate_handle(&self.company_handle, "companyHandle"),
        );
        finish(errors)
    }
}

/// DTO for partial job updates. The company of a job cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateJobRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, example = "0.333")]
    pub equity: Option<Option<Decimal>>,
}

impl UpdateJobRequest {
    /// Ordered assignments for the fields present in the request
    pub fn to_changeset(&self) -> Changeset {
        let mut changeset = Changeset::new();
        if let Some(title) = &self.title {
            changeset.push("title", title.clone());
        }
        if let Some(salary) = self.salary {
            changeset.push("salary", salary);
        }
        if let Some(equity) = self.equity {
            changeset.push("equity", equity);
        }
        changeset
    }
}

impl Validate for UpdateJobRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(title) = &self.title {
            push_error(&mut errors, "title", Validation::validate_not_empty(title, "title"));
        }
        if let Some(Some(salary)) = self.salary {
            push_error(
                &mut errors,
                "salary",
                Validation::validate_range(salary, "salary", Some(0), None),
            );
        }
        if let Some(Some(equity)) = &self.equity {
            push_error(&mut errors, "equity", Validation::validate_equity(equity, "equity"));
        }
        finish(errors)
    }
}

/// Optional job list filters (`GET /jobs?title=&minSalary=&hasEquity=`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct JobFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Only jobs paying strictly more than this
    pub min_salary: Option<i32>,
    /// `true` keeps only jobs with equity above zero; `false` is no filter
    pub has_equity: Option<bool>,
}

/// `{ "job": ... }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub job: JobDto,
}

/// `{ "jobs": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobListResponse {
    pub jobs: Vec<JobDto>,
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

/// DTO for company responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            handle: company.handle().to_string(),
            name: company.name().to_string(),
            description: company.description().to_string(),
            num_employees: company.num_employees(),
            logo_url: company.logo_url().map(|u| u.to_string()),
        }
    }
}

/// DTO for a single company including its jobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetailDto {
    #[serde(flatten)]
    pub company: CompanyDto,
    pub jobs: Vec<CompanyJobDto>,
}

impl From<CompanyWithJobs> for CompanyDetailDto {
    fn from(value: CompanyWithJobs) -> Self {
        Self {
            company: value.company.into(),
            jobs: value.jobs.into_iter().map(CompanyJobDto::from).collect(),
        }
    }
}

/// DTO for company creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCompanyRequest {
    #[validate(
        length(min = 1, max = 25, message = "Handle must be 1 to 25 characters"),
        regex(path = *HANDLE_REGEX, message = "Handle can only contain lowercase letters, digits and hyphens")
    )]
    pub handle: String,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0, message = "numEmployees cannot be negative"))]
    pub num_employees: Option<i32>,
    #[validate(url(message = "logoUrl must be a valid URL"))]
    pub logo_url: Option<String>,
}

/// DTO for partial company updates. The handle cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub num_employees: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub logo_url: Option<Option<String>>,
}

impl UpdateCompanyRequest {
    /// Ordered assignments keyed by the API field names (`numEmployees`,
    /// `logoUrl`); the repository maps them onto columns.
    pub fn to_changeset(&self) -> Changeset {
        let mut changeset = Changeset::new();
        if let Some(name) = &self.name {
            changeset.push("name", name.clone());
        }
        if let Some(description) = &self.description {
            changeset.push("description", description.clone());
        }
        if let Some(num_employees) = self.num_employees {
            changeset.push("numEmployees", num_employees);
        }
        if let Some(logo_url) = &self.logo_url {
            changeset.push("logoUrl", logo_url.clone());
        }
        changeset
    }
}

impl Validate for UpdateCompanyRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            push_error(&mut errors, "name", Validation::validate_not_empty(name, "name"));
        }
        if let Some(Some(num_employees)) = self.num_employees {
            push_error(
                &mut errors,
                "numEmployees",
                Validation::validate_range(num_employees, "numEmployees", Some(0), None),
            );
        }
        if let Some(Some(logo_url)) = &self.logo_url {
            // Same rule as `#[validate(url)]` on create
            if !logo_url.validate_url() {
                let mut error = ValidationError::new("url");
                error.message = Some(Cow::Borrowed("logoUrl must be a valid URL"));
                errors.add("logoUrl", error);
            }
        }
        finish(errors)
    }
}

/// Optional company list filters
/// (`GET /companies?name=&minEmployees=&maxEmployees=`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct CompanyFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
}

/// `{ "company": ... }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub company: CompanyDto,
}

/// `{ "company": ... }` with the company's jobs
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetailDto,
}

/// `{ "companies": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanyDto>,
}

/// `{ "deleted": "<id or handle>" }`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::changeset::SqlValue;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_update_job_request_distinguishes_null_from_absent() {
        let request: UpdateJobRequest =
            serde_json::from_value(json!({ "title": "CEO", "equity": null })).unwrap();

        assert_eq!(request.title.as_deref(), Some("CEO"));
        assert_eq!(request.salary, None);
        assert_eq!(request.equity, Some(None));

        let changeset = request.to_changeset();
        assert_eq!(changeset.field_names(), vec!["title", "equity"]);
        assert_eq!(changeset.get("equity"), Some(&SqlValue::Decimal(None)));
    }

    #[test]
    fn test_update_job_request_rejects_company_handle() {
        let result: Result<UpdateJobRequest, _> =
            serde_json::from_value(json!({ "companyHandle": "other" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_job_request_empty_body_gives_empty_changeset() {
        let request: UpdateJobRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.to_changeset().is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_job_request_validation() {
        let request: UpdateJobRequest =
            serde_json::from_value(json!({ "title": "", "salary": -5, "equity": "1.5" })).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("salary"));
        assert!(fields.contains_key("equity"));
    }

    #[test]
    fn test_create_job_request_accepts_numeric_equity() {
        let request: CreateJobRequest = serde_json::from_value(json!({
            "title": "new",
            "salary": 123000,
            "equity": 0.5,
            "companyHandle": "c1"
        }))
        .unwrap();

        assert_eq!(request.equity, Some(Decimal::from_str("0.5").unwrap()));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_job_request_missing_fields() {
        let result: Result<CreateJobRequest, _> =
            serde_json::from_value(json!({ "id": 3463246, "salary": -999 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_job_dto_serializes_equity_as_string() {
        let dto = JobDto {
            id: 1,
            title: "Transporter".to_string(),
            salary: Some(123000),
            equity: Some(Decimal::from_str("0.091").unwrap()),
            company_handle: "c3".to_string(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["equity"], json!("0.091"));

        let no_equity = JobDto { equity: None, ..dto };
        assert_eq!(serde_json::to_value(&no_equity).unwrap()["equity"], json!(null));
    }

    #[test]
    fn test_update_company_request_uses_api_field_names() {
        let request: UpdateCompanyRequest = serde_json::from_value(json!({
            "name": "Bauer-Gallagher",
            "numEmployees": 862,
            "logoUrl": null
        }))
        .unwrap();

        let changeset = request.to_changeset();
        assert_eq!(changeset.field_names(), vec!["name", "numEmployees", "logoUrl"]);
        assert_eq!(changeset.get("logoUrl"), Some(&SqlValue::Text(None)));
    }

    #[test]
    fn test_create_company_request_validation() {
        let request: CreateCompanyRequest = serde_json::from_value(json!({
            "handle": "Bad Handle",
            "name": "",
            "description": "d",
            "numEmployees": -1,
            "logoUrl": "not a url"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 4);
        assert!(fields.contains_key("handle"));
        assert!(fields.contains_key("name"));
    }

    #[test]
    fn test_logo_url_rule_matches_between_create_and_update() {
        for url in [
            "http://c1.img",
            "https://example.com/logo.png",
            "ftp://example.com/logo.png",
            "http://not a url",
            "/logos/logo2.png",
            "",
        ] {
            let create = CreateCompanyRequest {
                handle: "new".to_string(),
                name: "New".to_string(),
                description: "DescNew".to_string(),
                num_employees: None,
                logo_url: Some(url.to_string()),
            };
            let update = UpdateCompanyRequest {
                logo_url: Some(Some(url.to_string())),
                ..Default::default()
            };

            assert_eq!(
                create.validate().is_ok(),
                update.validate().is_ok(),
                "{url:?}"
            );
        }
    }

    #[test]
    fn test_update_company_request_rejects_bad_logo_url() {
        let request = UpdateCompanyRequest {
            logo_url: Some(Some("http://not a url".to_string())),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        let logo_errors = fields["logoUrl"];
        assert_eq!(
            logo_errors[0].message.as_deref(),
            Some("logoUrl must be a valid URL")
        );

        let cleared = UpdateCompanyRequest {
            logo_url: Some(None),
            ..Default::default()
        };
        assert!(cleared.validate().is_ok());
    }

    #[test]
    fn test_company_detail_flattens_company_fields() {
        let detail = CompanyDetailDto {
            company: CompanyDto {
                handle: "c1".to_string(),
                name: "C1".to_string(),
                description: "Desc1".to_string(),
                num_employees: Some(1),
                logo_url: None,
            },
            jobs: vec![],
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["handle"], json!("c1"));
        assert_eq!(value["numEmployees"], json!(1));
        assert_eq!(value["jobs"], json!([]));
    }

    #[test]
    fn test_job_filter_parses_camel_case() {
        let filter: JobFilter =
            serde_json::from_value(json!({ "minSalary": 68001, "hasEquity": true })).unwrap();
        assert_eq!(filter.min_salary, Some(68001));
        assert_eq!(filter.has_equity, Some(true));
        assert_eq!(filter.title, None);
    }
}
