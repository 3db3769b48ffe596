//! The authentication boundary for handlers.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Response;

use authserver_auth::Identity;

use crate::app::AppState;
use crate::app::errors;

/// The authenticated identity behind the request's bearer token.
///
/// Protected handlers take this as an argument; extraction runs the full
/// authenticate path (verify token, re-fetch the live directory record) and
/// rejects with 401 before the handler body runs.
pub struct CurrentUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        state
            .authenticator
            .authenticate(header)
            .map(CurrentUser)
            .map_err(|e| errors::auth_error_response(&e))
    }
}
