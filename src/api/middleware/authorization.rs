use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::errors::ApiError;
use crate::domain::authorization::{ensure_admin, UserContext};

/// Reject the request with 401 unless the caller is an admin.
/// Expects `auth_middleware` to run first.
pub async fn require_admin(request: Request, next: Next) -> Response {
    if let Err(err) = ensure_admin(request.extensions().get::<UserContext>()) {
        tracing::info!(
            method = %request.method(),
            uri = %request.uri(),
            reason = %err,
            "admin_access_denied"
        );
        return ApiError::from(err).into_response();
    }

    next.run(request).await
}
