use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_and_respond;
use crate::application::{
    dto::{
        CreateJobRequest, DeletedResponse, JobFilter, JobListResponse, JobResponse,
        UpdateJobRequest,
    },
    use_cases::{
        CreateJobUseCase, DeleteJobUseCase, GetJobUseCase, ListJobsUseCase, UpdateJobUseCase,
    },
};
use crate::domain::value_objects::JobId;

fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<JobId, ApiError> {
    let Path(raw) = path?;
    Ok(raw.parse()?)
}

/// POST /jobs
/// Create a job (admin only)
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Admin token required"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer" = []))
)]
pub async fn create_job_handler(
    State(use_case): State<Arc<CreateJobUseCase>>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JobResponse>), ApiError> {
    let Json(request) = payload?;
    validate_and_respond(&request)?;

    let job = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(JobResponse { job })))
}

/// GET /jobs
/// List jobs, optionally filtered
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    params(JobFilter),
    responses(
        (status = 200, description = "Jobs ordered by title", body = JobListResponse),
        (status = 400, description = "Invalid query string"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_jobs_handler(
    State(use_case): State<Arc<ListJobsUseCase>>,
    query: Result<Query<JobFilter>, QueryRejection>,
) -> Result<Json<JobListResponse>, ApiError> {
    let Query(filter) = query?;
    let jobs = use_case.execute(filter).await?;
    Ok(Json(JobListResponse { jobs }))
}

/// GET /jobs/{id}
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job found", body = JobResponse),
        (status = 400, description = "Invalid job id"),
        (status = 404, description = "Job not found")
    )
)]
pub async fn get_job_handler(
    State(use_case): State<Arc<GetJobUseCase>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<JobResponse>, ApiError> {
    let id = parse_id(path)?;
    let job = use_case.execute(id).await?;
    Ok(Json(JobResponse { job }))
}

/// PATCH /jobs/{id}
/// Partially update a job (admin only). The company cannot be changed.
#[utoipa::path(
    patch,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    request_body = UpdateJobRequest,
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 400, description = "Empty or invalid body"),
        (status = 401, description = "Admin token required"),
        (status = 404, description = "Job not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_job_handler(
    State(use_case): State<Arc<UpdateJobUseCase>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateJobRequest>, JsonRejection>,
) -> Result<Json<JobResponse>, ApiError> {
    let id = parse_id(path)?;
    let Json(request) = payload?;
    validate_and_respond(&request)?;

    let job = use_case.execute(id, request).await?;
    Ok(Json(JobResponse { job }))
}

/// DELETE /jobs/{id}
/// Delete a job (admin only)
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = i32, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job deleted", body = DeletedResponse),
        (status = 401, description = "Admin token required"),
        (status = 404, description = "Job not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_job_handler(
    State(use_case): State<Arc<DeleteJobUseCase>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = parse_id(path)?;
    use_case.execute(id).await?;
    Ok(Json(DeletedResponse {
        deleted: id.to_string(),
    }))
}
