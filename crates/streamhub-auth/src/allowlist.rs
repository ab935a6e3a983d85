//! The admin email allowlist.
//!
//! One immutable, process-wide value built from configuration at
//! startup. `auth.admin_emails` is the only source; nothing else in the
//! process may declare admin membership.

use std::collections::HashSet;

use streamhub_core::config::auth::AuthConfig;

/// Normalize an email for allowlist comparison: trim + ASCII lowercase.
///
/// Membership is case-insensitive. Mail providers treat the local part
/// case-insensitively in practice, and a case mismatch must never grant
/// or withhold admin.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// An immutable set of admin emails, normalized at construction.
#[derive(Debug, Clone)]
pub struct AdminAllowlist {
    emails: HashSet<String>,
}

impl AdminAllowlist {
    /// Build the allowlist from a list of raw email strings.
    ///
    /// Blank entries are dropped.
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = emails
            .into_iter()
            .map(|e| normalize_email(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        Self { emails }
    }

    /// Build the allowlist from the auth configuration section.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.admin_emails)
    }

    /// Whether the given email is a member, case-insensitively.
    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(&normalize_email(email))
    }

    /// Number of allowlisted emails.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Whether the allowlist is empty.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let list = AdminAllowlist::new(["Admin@Example.com"]);
        assert!(list.contains("admin@example.com"));
        assert!(list.contains("ADMIN@EXAMPLE.COM"));
        assert!(list.contains("  admin@example.com  "));
        assert!(!list.contains("user@example.com"));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let list = AdminAllowlist::new(["", "  ", "admin@example.com"]);
        assert_eq!(list.len(), 1);
    }
}
