//! Request/response DTOs and JSON mapping.

use serde::{Deserialize, Serialize};

use authserver_auth::{Identity, Login};
use authserver_core::{CategoryId, EventId, UserId};
use authserver_events::{Category, Event, EventDraft};
use authserver_users::User;

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public user view. Credentials never leave the directory.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let mut roles: Vec<String> = user.roles.iter().map(|r| r.as_str().to_string()).collect();
        roles.sort();
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            roles,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub id: UserId,
    pub name: String,
    pub roles: Vec<String>,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        let mut roles: Vec<String> = identity
            .roles
            .iter()
            .map(|r| r.as_str().to_string())
            .collect();
        roles.sort();
        Self {
            id: identity.id,
            name: identity.name,
            roles,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: IdentityResponse,
}

impl From<Login> for LoginResponse {
    fn from(login: Login) -> Self {
        Self {
            token: login.token,
            user: login.identity.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events / categories
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub description: String,
    pub creator_id: i64,
    pub category_id: i64,
}

impl From<EventRequest> for EventDraft {
    fn from(req: EventRequest) -> Self {
        Self {
            name: req.name,
            location: req.location,
            hour: req.hour,
            description: req.description,
            creator_id: UserId::new(req.creator_id),
            category_id: CategoryId::new(req.category_id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: EventId,
    pub name: String,
    pub location: String,
    pub hour: String,
    pub description: String,
    pub creator_id: UserId,
    pub category_id: CategoryId,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            location: event.location,
            hour: event.hour,
            description: event.description,
            creator_id: event.creator_id,
            category_id: event.category_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
