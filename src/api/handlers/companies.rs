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
        CompanyDetailResponse, CompanyFilter, CompanyListResponse, CompanyResponse,
        CreateCompanyRequest, DeletedResponse, UpdateCompanyRequest,
    },
    use_cases::{
        CreateCompanyUseCase, DeleteCompanyUseCase, GetCompanyUseCase, ListCompaniesUseCase,
        UpdateCompanyUseCase,
    },
};
use crate::domain::value_objects::CompanyHandle;

fn parse_handle(path: Result<Path<String>, PathRejection>) -> Result<CompanyHandle, ApiError> {
    let Path(raw) = path?;
    Ok(raw.parse()?)
}

/// POST /companies
/// Create a company (admin only)
#[utoipa::path(
    post,
    path = "/companies",
    tag = "companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Invalid body or duplicate handle"),
        (status = 401, description = "Admin token required")
    ),
    security(("bearer" = []))
)]
pub async fn create_company_handler(
    State(use_case): State<Arc<CreateCompanyUseCase>>,
    payload: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let Json(request) = payload?;
    validate_and_respond(&request)?;

    let company = use_case.execute(request).await?;
    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// GET /companies
#[utoipa::path(
    get,
    path = "/companies",
    tag = "companies",
    params(CompanyFilter),
    responses(
        (status = 200, description = "Companies ordered by name", body = CompanyListResponse),
        (status = 400, description = "Invalid filters")
    )
)]
pub async fn list_companies_handler(
    State(use_case): State<Arc<ListCompaniesUseCase>>,
    query: Result<Query<CompanyFilter>, QueryRejection>,
) -> Result<Json<CompanyListResponse>, ApiError> {
    let Query(filter) = query?;
    let companies = use_case.execute(filter).await?;
    Ok(Json(CompanyListResponse { companies }))
}

/// GET /companies/{handle}
/// A company with its jobs
#[utoipa::path(
    get,
    path = "/companies/{handle}",
    tag = "companies",
    params(("handle" = String, Path, description = "Company handle")),
    responses(
        (status = 200, description = "Company found", body = CompanyDetailResponse),
        (status = 404, description = "Company not found")
    )
)]
pub async fn get_company_handler(
    State(use_case): State<Arc<GetCompanyUseCase>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CompanyDetailResponse>, ApiError> {
    let handle = parse_handle(path)?;
    let company = use_case.execute(&handle).await?;
    Ok(Json(CompanyDetailResponse { company }))
}

/// PATCH /companies/{handle}
/// Partially update a company (admin only). The handle cannot be changed.
#[utoipa::path(
    patch,
    path = "/companies/{handle}",
    tag = "companies",
    params(("handle" = String, Path, description = "Company handle")),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 400, description = "Empty or invalid body"),
        (status = 401, description = "Admin token required"),
        (status = 404, description = "Company not found")
    ),
    security(("bearer" = []))
)]
pub async fn update_company_handler(
    State(use_case): State<Arc<UpdateCompanyUseCase>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateCompanyRequest>, JsonRejection>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let handle = parse_handle(path)?;
    let Json(request) = payload?;
    validate_and_respond(&request)?;

    let company = use_case.execute(&handle, request).await?;
    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{handle}
/// Delete a company and, by cascade, its jobs (admin only)
#[utoipa::path(
    delete,
    path = "/companies/{handle}",
    tag = "companies",
    params(("handle" = String, Path, description = "Company handle")),
    responses(
        (status = 200, description = "Company deleted", body = DeletedResponse),
        (status = 401, description = "Admin token required"),
        (status = 404, description = "Company not found")
    ),
    security(("bearer" = []))
)]
pub async fn delete_company_handler(
    State(use_case): State<Arc<DeleteCompanyUseCase>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let handle = parse_handle(path)?;
    use_case.execute(&handle).await?;
    Ok(Json(DeletedResponse {
        deleted: handle.into_inner(),
    }))
}
