use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use authserver_core::CategoryId;

use crate::app::extract::CurrentUser;
use crate::app::routes::events;
use crate::app::{AppState, dto, errors};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events/category", get(list_categories).post(create_category))
        .route(
            "/events/category/:id",
            get(events::events_by_category).delete(delete_category),
        )
}

pub async fn list_categories(State(state): State<AppState>) -> Response {
    let body: Vec<dto::CategoryResponse> = state
        .events
        .list_categories()
        .into_iter()
        .map(Into::into)
        .collect();
    Json(body).into_response()
}

pub async fn create_category(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Json(body): Json<dto::CategoryRequest>,
) -> Response {
    match state.events.create_category(&identity, &body.name) {
        Ok(category) => {
            (StatusCode::CREATED, Json(dto::CategoryResponse::from(category))).into_response()
        }
        Err(e) => errors::auth_error_response(&e),
    }
}

pub async fn delete_category(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id");
        }
    };

    match state.events.delete_category(&identity, id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::auth_error_response(&e),
    }
}
