//! `authserver-users` — the User Directory boundary and user lifecycle.
//!
//! The directory itself is an external collaborator; this crate defines the
//! narrow [`UserDirectory`] interface plus the [`UsersService`] that
//! enforces the lifecycle rules on top of it (baseline role grant, the
//! last-admin invariant).

pub mod directory;
pub mod service;
pub mod user;

pub use directory::UserDirectory;
pub use service::{CreateUser, UsersService};
pub use user::{NewUser, User};
