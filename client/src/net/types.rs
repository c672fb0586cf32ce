//! Wire DTOs for the external auth service's REST surface.
//!
//! DESIGN
//! ======
//! Parsing is tolerant in one direction only: anything that does not yield a
//! well-formed user collapses to "no session" so the UI falls back to its
//! signed-out rendering instead of surfacing an error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user carried inside a [`Session`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Opaque identifier. Providers that emit numeric ids are normalized to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL, if the identity provider supplied one.
    #[serde(default)]
    pub image: Option<String>,
}

/// Session snapshot as returned by `GET /api/auth/session`.
///
/// The service answers `{}` when nobody is signed in, which deserializes to a
/// session with no user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<SessionUser>,
    /// Expiry timestamp (ISO 8601) as reported by the service.
    #[serde(default)]
    pub expires: Option<String>,
}

impl Session {
    /// The signed-in user, if this session carries one.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}

/// Body of `GET /api/auth/csrf`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CsrfToken {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

/// Body returned by the sign-in and sign-out endpoints when the request
/// carries `X-Auth-Return-Redirect: 1`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RedirectResponse {
    pub url: String,
}

/// Parse a session endpoint body.
///
/// Returns `None` for an empty body, `null`, non-JSON input, or a user object
/// that is missing its `id` or `name`.
#[must_use]
pub fn parse_session(body: &str) -> Option<Session> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str::<Option<Session>>(trimmed).ok().flatten()
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) if !id.is_empty() => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::String(_) => Err(D::Error::custom("empty user id")),
        _ => Err(D::Error::custom("expected string or number user id")),
    }
}
