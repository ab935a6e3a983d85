//! Role resolution: maps an identity's email to a role.

use streamhub_entity::user::Role;

use crate::allowlist::AdminAllowlist;

/// Derives a [`Role`] from an email and the immutable admin allowlist.
///
/// Resolution is a pure, synchronous function and is re-run at every
/// authorization point. The result is never persisted, so an allowlist
/// change takes effect on the next request rather than surviving as a
/// stale privilege.
#[derive(Debug, Clone)]
pub struct RoleResolver {
    allowlist: AdminAllowlist,
}

impl RoleResolver {
    /// Create a resolver over the given allowlist.
    pub fn new(allowlist: AdminAllowlist) -> Self {
        Self { allowlist }
    }

    /// Resolve the role for an email.
    ///
    /// Fails closed: anything that is not an allowlist member, including
    /// a blank email, resolves to [`Role::User`].
    pub fn resolve(&self, email: &str) -> Role {
        if self.allowlist.contains(email) {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// The allowlist this resolver was built with.
    pub fn allowlist(&self) -> &AdminAllowlist {
        &self.allowlist
    }
}
