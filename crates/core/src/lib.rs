//! `authserver-core` — shared foundation for the auth server.
//!
//! This crate contains **pure domain** primitives (no transport or storage
//! concerns): the error taxonomy surfaced to callers and the strongly-typed
//! identifiers assigned by the directory/stores.

pub mod error;
pub mod id;

pub use error::AuthError;
pub use id::{CategoryId, EventId, UserId};
