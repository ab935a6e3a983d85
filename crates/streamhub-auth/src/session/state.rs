//! Session state snapshot types.

use serde::{Deserialize, Serialize};

use streamhub_entity::user::Role;

/// The authenticated principal held by a client session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Email address, as reported by the credential.
    pub email: String,
    /// The opaque bearer credential backing this identity.
    pub credential: String,
}

impl Identity {
    /// Create an identity from an email and its backing credential.
    pub fn new(email: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            credential: credential.into(),
        }
    }
}

/// Snapshot of a client session.
///
/// `ready` is false only during the initial asynchronous credential
/// restore. No route decision other than "show loading" may be made
/// while it is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The signed-in principal, if any.
    pub identity: Option<Identity>,
    /// The role derived from the identity, if any.
    pub role: Option<Role>,
    /// Whether the initial credential restore has completed.
    pub ready: bool,
}

impl SessionState {
    /// The empty state a session starts in, before the restore completes.
    pub fn initial() -> Self {
        Self {
            identity: None,
            role: None,
            ready: false,
        }
    }

    /// Whether an identity is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether the signed-in identity resolved to admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(Role::Admin))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}
