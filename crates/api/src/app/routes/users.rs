use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use authserver_auth::Role;
use authserver_core::UserId;
use authserver_users::CreateUser;

use crate::app::extract::CurrentUser;
use crate::app::{AppState, dto, errors};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/login", post(login))
        .route("/users/me", get(me))
        .route("/users/:id", get(get_user).delete(delete_user))
        .route("/users/:id/events", get(user_events))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<dto::CreateUserRequest>,
) -> Response {
    match state.users.create(CreateUser {
        email: body.email,
        password: body.password,
        name: body.name,
    }) {
        Ok(user) => (StatusCode::CREATED, Json(dto::UserResponse::from(user))).into_response(),
        Err(e) => errors::auth_error_response(&e),
    }
}

#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    role: Option<String>,
}

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Response {
    let users = match params.role {
        Some(role) => state.users.list(Some(&Role::new(role))),
        None => state.users.list(None),
    };
    let body: Vec<dto::UserResponse> = users.into_iter().map(Into::into).collect();
    Json(body).into_response()
}

pub async fn login(State(state): State<AppState>, Json(body): Json<dto::LoginRequest>) -> Response {
    match state.authenticator.login(&body.email, &body.password) {
        Ok(Some(login)) => Json(dto::LoginResponse::from(login)).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "not authenticated",
        ),
        Err(e) => errors::auth_error_response(&e),
    }
}

pub async fn me(State(state): State<AppState>, CurrentUser(identity): CurrentUser) -> Response {
    match state.users.get(identity.id) {
        Some(user) => Json(dto::UserResponse::from(user)).into_response(),
        // The identity resolved an instant ago; a miss here means the
        // record vanished mid-request.
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    match state.users.get(id) {
        Some(user) => Json(dto::UserResponse::from(user)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    match state.users.delete(&identity, id) {
        Ok(true) => StatusCode::OK.into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        Err(e) => errors::auth_error_response(&e),
    }
}

pub async fn user_events(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    match state.events.list_events_by_creator(id) {
        Ok(events) => {
            let body: Vec<dto::EventResponse> = events.into_iter().map(Into::into).collect();
            Json(body).into_response()
        }
        Err(e) => errors::auth_error_response(&e),
    }
}
