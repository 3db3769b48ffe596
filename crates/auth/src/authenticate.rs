//! Resolving the current [`Identity`] from inbound credentials.
//!
//! The [`Authenticator`] sits at the request boundary: it understands the
//! `Authorization: Bearer <token>` convention and the login credential
//! check, and nothing else about the transport.

use std::sync::Arc;

use authserver_core::{AuthError, UserId};

use crate::identity::Identity;
use crate::token::TokenCodec;

/// Narrow seam onto the User Directory.
///
/// The auth core never sees full user records; it only needs to turn an id
/// into a live identity, or an email into the stored credential record.
pub trait PrincipalSource: Send + Sync {
    /// Live identity for an id, or `None` if the record no longer exists.
    fn identity_by_id(&self, id: UserId) -> Option<Identity>;

    /// Stored credentials for an email, or `None` for an unknown address.
    fn credentials_by_email(&self, email: &str) -> Option<Credentials>;
}

/// A stored credential record, as the directory keeps it.
///
/// Passwords are stored and compared in plaintext. Hashing belongs in the
/// directory, behind this same seam, and would not change this type's shape.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub identity: Identity,
    pub password: String,
}

/// A successful login: the freshly issued token plus the public identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub token: String,
    pub identity: Identity,
}

/// Resolves identities from bearer tokens and login credentials.
pub struct Authenticator {
    source: Arc<dyn PrincipalSource>,
    codec: TokenCodec,
}

impl Authenticator {
    pub fn new(source: Arc<dyn PrincipalSource>, codec: TokenCodec) -> Self {
        Self { source, codec }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Resolve the identity behind an `Authorization` header value.
    ///
    /// A missing header, a malformed scheme, a bad or expired signature and
    /// a principal gone from the directory all collapse to
    /// [`AuthError::Unauthenticated`], so callers cannot distinguish a
    /// forged token from a deleted account.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Identity, AuthError> {
        let header = authorization.ok_or(AuthError::Unauthenticated)?;
        let token = bearer_token(header).ok_or(AuthError::Unauthenticated)?;

        let id = self
            .codec
            .verify(token)
            .map_err(|_| AuthError::Unauthenticated)?;

        // Re-fetch so the identity reflects live role state, not a snapshot
        // from issuance time.
        self.source
            .identity_by_id(id)
            .ok_or(AuthError::Unauthenticated)
    }

    /// Check login credentials and issue a token on success.
    ///
    /// A mismatch (unknown email or wrong password) is a *normal* outcome,
    /// `Ok(None)`, not an error.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<Login>, AuthError> {
        let Some(stored) = self.source.credentials_by_email(email) else {
            return Ok(None);
        };
        if stored.password != password {
            return Ok(None);
        }

        let token = self
            .codec
            .issue(stored.identity.id)
            .map_err(|e| AuthError::internal(e.to_string()))?;

        tracing::info!(
            id = stored.identity.id.get(),
            name = %stored.identity.name,
            "user logged in"
        );

        Ok(Some(Login {
            token,
            identity: stored.identity,
        }))
    }
}

/// Extract the token from an `Authorization` header value.
fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
