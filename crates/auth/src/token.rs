//! Signed, time-bounded bearer tokens (HS256 JWT).
//!
//! A token proves possession of a user id, nothing more: role and name are
//! re-derived from the directory on every authenticated request, so a stale
//! token never carries stale privileges.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use authserver_core::UserId;

/// Default validity window: one hour. Configurable at construction.
pub const DEFAULT_TTL_SECS: i64 = 3600;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature mismatch or malformed structure.
    #[error("invalid token")]
    Invalid,

    /// Structurally valid and correctly signed, but past its window.
    #[error("token expired")]
    Expired,

    /// Signing failed (key/serialization fault, not a policy outcome).
    #[error("token issuance failed")]
    Issuance,
}

/// Claims carried by a token. Only the subject id and the time bounds are
/// encoded; everything else about the principal stays in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    iat: i64,
    exp: i64,
}

/// Issues and verifies signed bearer tokens.
///
/// Holds the process-wide signing secret, injected once at startup and
/// read-only thereafter; the codec is cheap to share across requests.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Build a codec over an HS256 secret with the given validity window.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No tolerance on the window; a single wall-clock source (Utc) is
        // used for both issuance and verification.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Codec with the default one-hour window.
    pub fn with_default_ttl(secret: &[u8]) -> Self {
        Self::new(secret, Duration::seconds(DEFAULT_TTL_SECS))
    }

    /// Encode and sign a token for `id`. Pure computation, no persistence;
    /// the token is not tracked server-side and cannot be revoked.
    pub fn issue(&self, id: UserId) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: id.get(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Issuance)
    }

    /// Validate signature and window, returning the encoded user id.
    ///
    /// The signature comparison inside `jsonwebtoken` is constant-time.
    /// The returned id is *minimal* identity only: callers must re-fetch
    /// the directory record before trusting name or roles.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        if data.claims.sub <= 0 {
            return Err(TokenError::Invalid);
        }

        Ok(UserId::new(data.claims.sub))
    }
}
