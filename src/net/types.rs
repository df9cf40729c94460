//! Session API payloads.
//!
//! DESIGN
//! ======
//! `Identity` mirrors the server's user record. Fields the client does not
//! depend on default when absent so older servers still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl From<String> for Role {
    /// Unknown role strings downgrade to `User`.
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// The signed-in user as returned by `/api/login` and `/api/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Server-side user id.
    #[serde(default)]
    pub id: i64,
    /// Display handle.
    #[serde(default)]
    pub username: String,
    /// Login email.
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl Identity {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in the header: the username, or the email when unset.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() { &self.email } else { &self.username }
    }
}

/// Body of `POST /api/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Error body returned alongside non-200 session responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
