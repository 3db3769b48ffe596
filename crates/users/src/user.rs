//! The stored user record.

use serde::{Deserialize, Serialize};

use authserver_auth::{Identity, RoleSet};
use authserver_core::UserId;

/// A user as the directory stores it.
///
/// # Invariants
/// - `id` is positive, assigned by the directory at creation, never reused.
/// - `roles` is non-empty after creation; every user holds at least `USER`.
/// - `email` is the login key; `name` is display-only and not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Stored in plaintext. Hashing would live in the directory layer.
    pub password: String,
    pub name: String,
    pub roles: RoleSet,
}

impl User {
    /// The public identity view: everything except credentials.
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.name.clone(), self.roles.clone())
    }
}

/// A user record before the directory has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub roles: RoleSet,
}
