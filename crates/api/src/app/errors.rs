//! Consistent JSON error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use authserver_core::AuthError;

/// Map a core outcome to its HTTP shape. Callers only see the category.
pub fn auth_error_response(err: &AuthError) -> Response {
    match err {
        AuthError::Unauthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "not authenticated")
        }
        AuthError::Forbidden => json_error(StatusCode::FORBIDDEN, "forbidden", "not permitted"),
        AuthError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg.clone()),
        AuthError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        AuthError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg.clone())
        }
        AuthError::Internal(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
