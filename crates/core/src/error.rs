//! Error taxonomy surfaced by the auth core.

use thiserror::Error;

/// Outcome categories for authentication/authorization failures.
///
/// Callers only ever learn the category: an `Unauthenticated` never says
/// whether the token was bad or the principal vanished, so the surface does
/// not leak account existence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No usable credentials: missing/invalid/expired token, or the
    /// principal no longer resolves to a directory record.
    #[error("not authenticated")]
    Unauthenticated,

    /// Authenticated, but lacking the required role or ownership.
    #[error("not permitted")]
    Forbidden,

    /// The operation would violate a domain invariant.
    #[error("{0}")]
    Conflict(String),

    /// A referenced user/event/category does not exist.
    #[error("not found")]
    NotFound,

    /// Malformed input (e.g. an invalid email on user creation).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Infrastructure fault (e.g. token issuance failed). Never used for
    /// policy decisions.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
