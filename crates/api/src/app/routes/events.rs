use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use authserver_core::{CategoryId, EventId};

use crate::app::extract::CurrentUser;
use crate::app::{AppState, dto, errors};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/sorted", get(list_events_sorted))
        .route(
            "/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
}

pub async fn list_events(State(state): State<AppState>) -> Response {
    let body: Vec<dto::EventResponse> = state
        .events
        .list_events()
        .into_iter()
        .map(Into::into)
        .collect();
    Json(body).into_response()
}

pub async fn list_events_sorted(State(state): State<AppState>) -> Response {
    let body: Vec<dto::EventResponse> = state
        .events
        .list_events_sorted_by_name()
        .into_iter()
        .map(Into::into)
        .collect();
    Json(body).into_response()
}

pub async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id: EventId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid event id");
        }
    };

    match state.events.get_event(id) {
        Some(event) => Json(dto::EventResponse::from(event)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub async fn create_event(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
    Json(body): Json<dto::EventRequest>,
) -> Response {
    match state.events.create_event(body.into()) {
        Ok(event) => (StatusCode::CREATED, Json(dto::EventResponse::from(event))).into_response(),
        Err(e) => errors::auth_error_response(&e),
    }
}

pub async fn update_event(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<dto::EventRequest>,
) -> Response {
    let id: EventId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid event id");
        }
    };

    match state.events.update_event(&identity, id, body.into()) {
        Ok(event) => Json(dto::EventResponse::from(event)).into_response(),
        Err(e) => errors::auth_error_response(&e),
    }
}

pub async fn delete_event(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let id: EventId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid event id");
        }
    };

    match state.events.delete_event(&identity, id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::auth_error_response(&e),
    }
}

/// Events filed under a category. Lives here rather than in `categories`
/// because the response is a list of events.
pub async fn events_by_category(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id");
        }
    };

    let body: Vec<dto::EventResponse> = state
        .events
        .list_events_by_category(id)
        .into_iter()
        .map(Into::into)
        .collect();
    Json(body).into_response()
}
