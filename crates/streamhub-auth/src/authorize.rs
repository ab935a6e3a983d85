//! Server-side admin enforcement for privileged mutations.
//!
//! Every privileged endpoint re-derives the role from the credential
//! attached to the request and checks it here before touching the
//! backing store. A client-side route guard decision is never an input:
//! the guard is bypassable by direct API calls.

use uuid::Uuid;

use streamhub_core::error::AppError;
use streamhub_entity::user::Role;

use crate::resolver::RoleResolver;

/// The authenticated principal attached to a request, with its role
/// freshly derived from the allowlist.
#[derive(Debug, Clone)]
pub struct RequestPrincipal {
    /// User id from the verified credential.
    pub user_id: Uuid,
    /// Email from the verified credential.
    pub email: String,
    /// Role derived for this request.
    pub role: Role,
}

impl RequestPrincipal {
    /// Build a principal by resolving the role for the verified identity.
    pub fn resolve(resolver: &RoleResolver, user_id: Uuid, email: impl Into<String>) -> Self {
        let email = email.into();
        let role = resolver.resolve(&email);
        Self {
            user_id,
            email,
            role,
        }
    }
}

/// Requires the admin role.
///
/// The error message does not reveal whether the target resource exists.
pub fn require_admin(principal: &RequestPrincipal) -> Result<(), AppError> {
    if principal.role.is_admin() {
        Ok(())
    } else {
        tracing::warn!(email = %principal.email, "Admin action denied");
        Err(AppError::forbidden("Admin access required"))
    }
}
