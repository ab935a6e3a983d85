//! User entity and role enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Authorization level of a principal.
///
/// A role is derived data: it is computed from the identity's email and
/// the admin allowlist, never stored on the [`User`] record and never
/// accepted from a client-supplied field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular viewer: browse and watch videos.
    User,
    /// Administrator: full CRUD over the video catalog.
    Admin,
}

impl Role {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = streamhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(streamhub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: user, admin"
            ))),
        }
    }
}

/// A registered account.
///
/// Note the absence of a role field: roles are resolved from the admin
/// allowlist on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier.
    pub id: Uuid,
    /// Email address, as supplied at registration.
    pub email: String,
    /// Argon2id password hash. Never serialized into API responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Optional display name.
    pub display_name: Option<String>,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Most recent successful login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user with a fresh id and the current timestamp.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            display_name: None,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }
}
