use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::{
    create_company_handler, create_job_handler, delete_company_handler, delete_job_handler,
    get_company_handler, get_job_handler, health_handler, list_companies_handler,
    list_jobs_handler, readiness_handler, update_company_handler, update_job_handler,
};
use crate::api::middleware::{auth, authorization::require_admin, cors, metrics};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{
    CreateCompanyUseCase, CreateJobUseCase, DeleteCompanyUseCase, DeleteJobUseCase,
    GetCompanyUseCase, GetJobUseCase, ListCompaniesUseCase, ListJobsUseCase,
    UpdateCompanyUseCase, UpdateJobUseCase,
};
use crate::config::Config;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub create_job_use_case: Arc<CreateJobUseCase>,
    pub list_jobs_use_case: Arc<ListJobsUseCase>,
    pub get_job_use_case: Arc<GetJobUseCase>,
    pub update_job_use_case: Arc<UpdateJobUseCase>,
    pub delete_job_use_case: Arc<DeleteJobUseCase>,
    pub create_company_use_case: Arc<CreateCompanyUseCase>,
    pub list_companies_use_case: Arc<ListCompaniesUseCase>,
    pub get_company_use_case: Arc<GetCompanyUseCase>,
    pub update_company_use_case: Arc<UpdateCompanyUseCase>,
    pub delete_company_use_case: Arc<DeleteCompanyUseCase>,
    pub jwt_keys: Arc<auth::JwtKeys>,
}

/// Create router with all routes and middleware.
///
/// Reads are public; every mutation requires an admin token.
pub fn create_router(state: AppState) -> Router {
    let admin = || axum_middleware::from_fn(require_admin);

    Router::new()
        // Health check (no auth required)
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        // Jobs
        .route(
            "/jobs",
            get(list_jobs_handler).with_state(state.list_jobs_use_case),
        )
        .route(
            "/jobs",
            post(create_job_handler)
                .with_state(state.create_job_use_case)
                .route_layer(admin()),
        )
        .route(
            "/jobs/{id}",
            get(get_job_handler).with_state(state.get_job_use_case),
        )
        .route(
            "/jobs/{id}",
            patch(update_job_handler)
                .with_state(state.update_job_use_case)
                .route_layer(admin()),
        )
        .route(
            "/jobs/{id}",
            delete(delete_job_handler)
                .with_state(state.delete_job_use_case)
                .route_layer(admin()),
        )
        // Companies
        .route(
            "/companies",
            get(list_companies_handler).with_state(state.list_companies_use_case),
        )
        .route(
            "/companies",
            post(create_company_handler)
                .with_state(state.create_company_use_case)
                .route_layer(admin()),
        )
        .route(
            "/companies/{handle}",
            get(get_company_handler).with_state(state.get_company_use_case),
        )
        .route(
            "/companies/{handle}",
            patch(update_company_handler)
                .with_state(state.update_company_use_case)
                .route_layer(admin()),
        )
        .route(
            "/companies/{handle}",
            delete(delete_company_handler)
                .with_state(state.delete_company_use_case)
                .route_layer(admin()),
        )
        .merge(swagger_ui())
        // Apply middleware layers (auth + request logging)
        .layer(axum_middleware::from_fn_with_state(
            state.jwt_keys,
            auth::auth_middleware,
        ))
        .layer(axum_middleware::from_fn(metrics::metrics_middleware))
}

/// Router plus the outer layers driven by configuration (CORS, body size)
pub fn create_app(state: AppState, config: &Config) -> Router {
    create_router(state)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(cors::create_cors_layer_for_environment(config))
}
