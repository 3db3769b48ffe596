//! User lifecycle on top of the directory.

use std::sync::{Arc, Mutex};

use authserver_auth::{
    Credentials, Identity, PrincipalSource, Role, RoleSet, guard,
};
use authserver_core::{AuthError, UserId};

use crate::directory::UserDirectory;
use crate::user::{NewUser, User};

/// Request to register a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// User lifecycle operations: registration, lookup, deletion.
///
/// Holds no state of its own beyond a mutex that serializes deletions, so
/// that the last-admin count check and the delete it guards always execute
/// as one critical section (two concurrent "delete the second-to-last
/// admin" requests must not both observe a safe count).
pub struct UsersService {
    directory: Arc<dyn UserDirectory>,
    delete_lock: Mutex<()>,
}

impl UsersService {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            delete_lock: Mutex::new(()),
        }
    }

    /// Register a user. Every user is granted the baseline `USER` role.
    pub fn create(&self, req: CreateUser) -> Result<User, AuthError> {
        let email = req.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::validation("invalid email format"));
        }

        let name = req.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::validation("name cannot be empty"));
        }

        if self.directory.find_by_email(&email).is_some() {
            return Err(AuthError::conflict("email already registered"));
        }

        let roles: RoleSet = [Role::user()].into_iter().collect();
        Ok(self.directory.create(NewUser {
            email,
            password: req.password,
            name,
            roles,
        }))
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.directory.find_by_id(id)
    }

    /// All users sorted by name, or the members of one role.
    pub fn list(&self, role: Option<&Role>) -> Vec<User> {
        match role {
            Some(role) => self.directory.find_all_by_role(role),
            None => self.directory.find_all(),
        }
    }

    /// Delete a user. Only admins may delete, and the directory must never
    /// be left without an `ADMIN` member.
    ///
    /// Returns `Ok(false)` for an unknown id (nothing to delete).
    pub fn delete(&self, actor: &Identity, id: UserId) -> Result<bool, AuthError> {
        guard::require_role(actor, &Role::admin())?;

        // Critical section: count and delete must see a consistent view.
        let _serialized = self
            .delete_lock
            .lock()
            .map_err(|_| AuthError::internal("delete lock poisoned"))?;

        let Some(user) = self.directory.find_by_id(id) else {
            return Ok(false);
        };

        if user.roles.contains(&Role::admin()) {
            let admins = self.directory.count_by_role(&Role::admin());
            guard::ensure_not_last_admin(admins)?;
        }

        tracing::warn!(id = user.id.get(), name = %user.name, "user deleted");
        self.directory.delete(id);
        Ok(true)
    }
}

impl PrincipalSource for UsersService {
    fn identity_by_id(&self, id: UserId) -> Option<Identity> {
        self.directory.find_by_id(id).map(|u| u.identity())
    }

    fn credentials_by_email(&self, email: &str) -> Option<Credentials> {
        // The directory stores emails trimmed and lowercased; normalize the
        // lookup key the same way so login accepts the spelling the caller
        // registered with.
        let email = email.trim().to_lowercase();
        self.directory.find_by_email(&email).map(|u| Credentials {
            identity: u.identity(),
            password: u.password,
        })
    }
}
