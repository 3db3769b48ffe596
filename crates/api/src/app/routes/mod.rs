use axum::Json;
use axum::response::IntoResponse;

use crate::app::AppState;

pub mod categories;
pub mod events;
pub mod users;

/// Router for all resource endpoints. Protection is per-handler: anything
/// taking a [`crate::app::extract::CurrentUser`] requires a bearer token.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .merge(users::router())
        .merge(events::router())
        .merge(categories::router())
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
