//! Caller identity propagation
//!
//! Every dialog request carries the caller's identity in the `X-User-ID`
//! header. The value is externally issued and trusted as-is once present;
//! this module is the single place that trust decision lives, so a verified
//! token scheme can replace it later without touching store or handler code.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DialogError;

/// Well-known header asserting the caller's identity.
pub const USER_ID_HEADER: &str = "X-User-ID";

/// Opaque, externally-issued user identifier. The core never validates its
/// format or existence; that belongs to the edge service's auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Extractor for the identity header. Rejects with 401 before any handler
/// logic runs when the header is absent or empty.
#[derive(Debug, Clone)]
pub struct CallerIdentity(pub UserId);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = DialogError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| CallerIdentity(UserId::new(value)))
            .ok_or(DialogError::AuthMissing)
    }
}
