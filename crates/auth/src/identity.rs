//! The authenticated principal and its role set.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use authserver_core::UserId;

/// Role identifier used for RBAC.
///
/// Roles are opaque name tags with no hierarchy; membership is a set
/// relationship on a user. The directory only exercises `USER` and `ADMIN`,
/// but nothing here depends on a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Baseline role granted to every user at creation.
    pub const fn user() -> Self {
        Self(Cow::Borrowed("USER"))
    }

    pub const fn admin() -> Self {
        Self(Cow::Borrowed("ADMIN"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of roles with O(1) membership.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(HashSet<Role>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    pub fn insert(&mut self, role: Role) -> bool {
        self.0.insert(role)
    }

    pub fn remove(&mut self, role: &Role) -> bool {
        self.0.remove(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Identity of an authenticated principal.
///
/// Immutable value resolved at the request boundary: the stable directory
/// id plus the *live* name and role set re-fetched from the directory.
/// Name/roles are never taken from a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub roles: RoleSet,
}

impl Identity {
    pub fn new(id: UserId, name: impl Into<String>, roles: RoleSet) -> Self {
        Self {
            id,
            name: name.into(),
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_set_membership() {
        let roles: RoleSet = [Role::user(), Role::new("MANAGER")].into_iter().collect();
        assert!(roles.contains(&Role::user()));
        assert!(roles.contains(&Role::new("MANAGER")));
        assert!(!roles.contains(&Role::admin()));
    }

    #[test]
    fn role_set_dedupes() {
        let mut roles = RoleSet::new();
        assert!(roles.insert(Role::admin()));
        assert!(!roles.insert(Role::admin()));
        assert_eq!(roles.len(), 1);
    }
}
