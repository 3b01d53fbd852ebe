use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use utoipa::ToSchema;

const SERVICE_NAME: &str = "jobboard";

/// Basic health check response
#[derive(Debug, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Database readiness response
#[derive(Debug, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Sanitize database error messages to prevent information leakage
pub fn sanitize_db_error(error: &sqlx::Error) -> &'static str {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error",
        sqlx::Error::Database(_) => "Database operation error",
        sqlx::Error::Io(_) => "Database connection error",
        sqlx::Error::Tls(_) => "Database TLS error",
        sqlx::Error::PoolTimedOut => "Database pool timeout",
        sqlx::Error::PoolClosed => "Database pool closed",
        _ => "Database error",
    }
}

/// GET /health
/// Basic health check endpoint (no database check)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /health/ready
/// Readiness probe: database reachable and schema present
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(pool): State<Arc<PgPool>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let start_time = Instant::now();

    let check = tokio::time::timeout(
        Duration::from_secs(2),
        sqlx::query_scalar::<_, bool>(
            "SELECT to_regclass('companies') IS NOT NULL AND to_regclass('jobs') IS NOT NULL",
        )
        .fetch_one(pool.as_ref()),
    )
    .await;

    let response_time_ms = start_time.elapsed().as_millis() as u64;
    let response = |status: &str, database: &str, error: Option<String>| ReadinessResponse {
        status: status.to_string(),
        service: SERVICE_NAME.to_string(),
        database: database.to_string(),
        response_time_ms,
        error,
    };

    match check {
        Ok(Ok(true)) => (StatusCode::OK, Json(response("ready", "connected", None))),
        Ok(Ok(false)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(response(
                "not_ready",
                "connected",
                Some("Schema is missing the companies or jobs table".to_string()),
            )),
        ),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness_check_failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(response(
                    "not_ready",
                    "disconnected",
                    Some(sanitize_db_error(&e).to_string()),
                )),
            )
        }
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(response(
                "not_ready",
                "timeout",
                Some("Database query timed out after 2 seconds".to_string()),
            )),
        ),
    }
}
