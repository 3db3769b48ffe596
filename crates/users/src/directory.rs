//! The User Directory interface.

use authserver_auth::Role;
use authserver_core::UserId;

use crate::user::{NewUser, User};

/// External store of user records, roles and credentials.
///
/// In-process contract: lookups return owned snapshots, and implementations
/// must make `create` assign a fresh positive id that is never reused, even
/// after a delete. Implementations are expected to serialize writes
/// internally; the cross-call read-then-delete sequence for the last-admin
/// invariant is serialized by [`crate::UsersService`] instead.
pub trait UserDirectory: Send + Sync {
    fn find_by_id(&self, id: UserId) -> Option<User>;

    fn find_by_email(&self, email: &str) -> Option<User>;

    /// All users, sorted by display name.
    fn find_all(&self) -> Vec<User>;

    fn find_all_by_role(&self, role: &Role) -> Vec<User>;

    fn count_by_role(&self, role: &Role) -> usize;

    /// Persist a new record, assigning the next id.
    fn create(&self, user: NewUser) -> User;

    /// Remove a record, returning it if it existed.
    fn delete(&self, id: UserId) -> Option<User>;
}
