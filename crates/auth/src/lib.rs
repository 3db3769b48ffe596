//! `authserver-auth` — pure authentication/authorization core.
//!
//! This crate is intentionally decoupled from HTTP and storage: it sees the
//! User Directory only through the narrow [`PrincipalSource`] seam, and the
//! transport only as an optional `Authorization` header value.

pub mod authenticate;
pub mod guard;
pub mod identity;
pub mod token;

pub use authenticate::{Authenticator, Credentials, Login, PrincipalSource};
pub use guard::{ensure_not_last_admin, has_role, require_role, require_self_or_role};
pub use identity::{Identity, Role, RoleSet};
pub use token::{TokenCodec, TokenError};
