//! Service wiring: stores, directory, authenticator.

use std::sync::Arc;

use chrono::Duration;

use authserver_auth::{Authenticator, Role, RoleSet, TokenCodec};
use authserver_events::EventsService;
use authserver_infra::{InMemoryCategoryStore, InMemoryEventStore, InMemoryUserDirectory};
use authserver_users::{NewUser, UserDirectory, UsersService};

/// Startup configuration. The signing secret is injected here once and is
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    /// Seed admin created at startup when the directory is empty, so a
    /// fresh instance is administrable (no role-management endpoint exists).
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Shared handle to all services; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UsersService>,
    pub events: Arc<EventsService>,
    pub authenticator: Arc<Authenticator>,
}

/// Wire the in-memory stores and services into one state object.
pub fn build_state(config: AppConfig) -> AppState {
    let directory = Arc::new(InMemoryUserDirectory::new());

    if let Some(admin) = &config.bootstrap_admin {
        if directory.find_all().is_empty() {
            let roles: RoleSet = [Role::user(), Role::admin()].into_iter().collect();
            let user = directory.create(NewUser {
                email: admin.email.clone(),
                password: admin.password.clone(),
                name: admin.name.clone(),
                roles,
            });
            tracing::info!(id = user.id.get(), email = %user.email, "bootstrap admin created");
        }
    }

    let users = Arc::new(UsersService::new(directory));
    let codec = TokenCodec::new(config.jwt_secret.as_bytes(), config.token_ttl);
    let authenticator = Arc::new(Authenticator::new(users.clone(), codec));

    let events = Arc::new(EventsService::new(
        Arc::new(InMemoryEventStore::new()),
        Arc::new(InMemoryCategoryStore::new()),
        users.clone(),
    ));

    AppState {
        users,
        events,
        authenticator,
    }
}
