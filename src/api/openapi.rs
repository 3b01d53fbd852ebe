use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{
    CompanyDetailDto, CompanyDetailResponse, CompanyDto, CompanyJobDto, CompanyListResponse,
    CompanyResponse, CreateCompanyRequest, CreateJobRequest, DeletedResponse, JobDto,
    JobListResponse, JobResponse, UpdateCompanyRequest, UpdateJobRequest,
};

/// Registers the bearer scheme referenced by admin routes
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI specification for the job board API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobboard API",
        version = "1.0.0",
        description = "Companies and the jobs they post"
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::jobs::create_job_handler,
        crate::api::handlers::jobs::list_jobs_handler,
        crate::api::handlers::jobs::get_job_handler,
        crate::api::handlers::jobs::update_job_handler,
        crate::api::handlers::jobs::delete_job_handler,
        crate::api::handlers::companies::create_company_handler,
        crate::api::handlers::companies::list_companies_handler,
        crate::api::handlers::companies::get_company_handler,
        crate::api::handlers::companies::update_company_handler,
        crate::api::handlers::companies::delete_company_handler,
    ),
    components(
        schemas(
            JobDto,
            JobResponse,
            JobListResponse,
            CreateJobRequest,
            UpdateJobRequest,
            CompanyDto,
            CompanyJobDto,
            CompanyDetailDto,
            CompanyResponse,
            CompanyDetailResponse,
            CompanyListResponse,
            CreateCompanyRequest,
            UpdateCompanyRequest,
            DeletedResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "jobs", description = "Job postings"),
        (name = "companies", description = "Companies and their jobs")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
