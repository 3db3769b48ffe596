//! Strongly-typed identifiers used across the domain.
//!
//! Ids are positive integers handed out by the directory/stores at creation
//! time and never reused. `0` is not a valid id; a zero means "not yet
//! assigned" at the storage boundary and must never escape it.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Identifier of a user (the authenticated principal).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

/// Identifier of an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

/// Identifier of an event category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

macro_rules! impl_id_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw id. The storage layer is the only place that mints
            /// new values; everything else passes ids through.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }

            /// Whether this id could have been assigned by a store.
            pub const fn is_assigned(self) -> bool {
                self.0 > 0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = AuthError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s
                    .parse()
                    .map_err(|e| AuthError::validation(format!("{}: {}", $name, e)))?;
                if value <= 0 {
                    return Err(AuthError::validation(format!(
                        "{}: must be positive, got {}",
                        $name, value
                    )));
                }
                Ok(Self(value))
            }
        }
    };
}

impl_id_newtype!(UserId, "UserId");
impl_id_newtype!(EventId, "EventId");
impl_id_newtype!(CategoryId, "CategoryId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert!(id.is_assigned());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!("0".parse::<UserId>().is_err());
        assert!("-7".parse::<EventId>().is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!("abc".parse::<CategoryId>().is_err());
    }
}
