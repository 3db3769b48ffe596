//! Authorization guard: pure decision functions over an [`Identity`].
//!
//! - No IO
//! - No panics
//! - Never defaults to "allowed"
//!
//! The one check that needs directory state (the last-admin count) is kept
//! pure here by taking the count as an argument; composing the count query
//! with the deletion under one isolation scope is the caller's job.

use authserver_core::{AuthError, UserId};

use crate::identity::{Identity, Role};

/// Message surfaced when a deletion would leave the system without admins.
pub const LAST_ADMIN_MESSAGE: &str = "Cannot delete the last system admin!";

pub fn has_role(identity: &Identity, role: &Role) -> bool {
    identity.roles.contains(role)
}

/// Require a role, or fail `Forbidden`.
pub fn require_role(identity: &Identity, role: &Role) -> Result<(), AuthError> {
    if has_role(identity, role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

/// Pass if the identity *is* the owner, or holds the fallback role.
pub fn require_self_or_role(
    identity: &Identity,
    owner: UserId,
    role: &Role,
) -> Result<(), AuthError> {
    if identity.id == owner || has_role(identity, role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

/// Last-admin invariant: deleting an admin is only safe while at least one
/// other admin remains. `admin_count` is the directory's current count,
/// queried in the same transaction/critical section as the delete.
pub fn ensure_not_last_admin(admin_count: usize) -> Result<(), AuthError> {
    if admin_count <= 1 {
        return Err(AuthError::conflict(LAST_ADMIN_MESSAGE));
    }
    Ok(())
}
