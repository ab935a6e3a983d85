//! User repository trait and in-memory implementation.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use streamhub_core::error::AppError;
use streamhub_core::result::AppResult;
use streamhub_entity::user::User;

/// Lookup key: emails are unique per account regardless of casing.
fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Access to registered accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new account. Fails with `Conflict` if the email is taken.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Find an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find an account by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Record a successful login.
    async fn touch_login(&self, id: Uuid) -> AppResult<()>;
}

/// In-memory user repository backed by concurrent maps.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    by_id: DashMap<Uuid, User>,
    id_by_email: DashMap<String, Uuid>,
}

impl MemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: User) -> AppResult<User> {
        let key = email_key(&user.email);
        // Entry API keeps the check-and-insert atomic per email key.
        match self.id_by_email.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(AppError::conflict(format!(
                "An account already exists for '{}'",
                user.email
            ))),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.by_id.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let id = match self.id_by_email.get(&email_key(email)) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.by_id.get(&id).map(|u| u.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.by_id.get(&id).map(|u| u.clone()))
    }

    async fn touch_login(&self, id: Uuid) -> AppResult<()> {
        match self.by_id.get_mut(&id) {
            Some(mut user) => {
                user.last_login_at = Some(Utc::now());
                Ok(())
            }
            None => Err(AppError::not_found(format!("No user with id {id}"))),
        }
    }
}
