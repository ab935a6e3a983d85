//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use streamhub_auth::jwt::decoder::JwtDecoder;
use streamhub_auth::jwt::encoder::JwtEncoder;
use streamhub_auth::password::hasher::PasswordHasher;
use streamhub_auth::resolver::RoleResolver;
use streamhub_core::config::AppConfig;
use streamhub_storage::manager::StorageManager;
use streamhub_store::user::UserRepository;
use streamhub_store::video::VideoRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and revocation tracker.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Role resolver over the immutable admin allowlist.
    pub role_resolver: Arc<RoleResolver>,

    /// Registered accounts.
    pub users: Arc<dyn UserRepository>,
    /// Video catalog.
    pub videos: Arc<dyn VideoRepository>,
    /// Media storage.
    pub storage: Arc<StorageManager>,
}
