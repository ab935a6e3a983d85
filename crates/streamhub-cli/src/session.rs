//! Persisted client session.
//!
//! Tokens from a successful login are stored in a JSON file so later CLI
//! invocations can restore the session, the same way a browser client
//! restores credentials from local storage. The restore is what drives
//! the session store: it publishes an auth-state event whose outcome
//! (signed in or signed out) determines the state every command sees.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use streamhub_auth::allowlist::AdminAllowlist;
use streamhub_auth::resolver::RoleResolver;
use streamhub_auth::session::events::{AuthEvent, AuthEventBus, SeqEvent};
use streamhub_auth::session::state::Identity;
use streamhub_auth::session::store::SessionStore;
use streamhub_core::config::AppConfig;
use streamhub_core::error::AppError;

/// On-disk session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Account email.
    pub email: String,
    /// Bearer token for API requests.
    pub access_token: String,
    /// Token used to obtain a fresh access token.
    pub refresh_token: String,
    /// Access token expiry.
    pub access_expires_at: DateTime<Utc>,
}

/// Where the session file lives.
///
/// Overridable with `STREAMHUB_SESSION` for tests and multi-account use.
pub fn session_path() -> PathBuf {
    if let Ok(path) = std::env::var("STREAMHUB_SESSION") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".streamhub").join("session.json")
}

/// Load the persisted session, if one exists.
pub async fn load() -> Result<Option<PersistedSession>, AppError> {
    let path = session_path();
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let session = serde_json::from_slice(&bytes).map_err(|e| {
                AppError::internal(format!("Corrupt session file '{}': {}", path.display(), e))
            })?;
            Ok(Some(session))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::internal(format!(
            "Failed to read session file '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// Persist a session after login.
pub async fn save(session: &PersistedSession) -> Result<(), AppError> {
    let path = session_path();
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create session dir: {}", e)))?;
    }
    let json = serde_json::to_vec_pretty(session)
        .map_err(|e| AppError::internal(format!("Failed to serialize session: {}", e)))?;
    tokio::fs::write(&path, json)
        .await
        .map_err(|e| AppError::internal(format!("Failed to write session file: {}", e)))?;
    Ok(())
}

/// Remove the persisted session. Missing file is not an error.
pub async fn clear() -> Result<(), AppError> {
    match tokio::fs::remove_file(session_path()).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::internal(format!(
            "Failed to remove session file: {}",
            e
        ))),
    }
}

/// Restore the persisted session into a fresh [`SessionStore`].
///
/// Publishes the restore outcome through an [`AuthEventBus`] and applies
/// it, so the returned store is ready: either signed in with a derived
/// role, or signed out. Mirrors the startup path of a browser client.
pub async fn restore_store(config: &AppConfig) -> Result<(Arc<SessionStore>, Option<PersistedSession>), AppError> {
    let resolver = RoleResolver::new(AdminAllowlist::from_config(&config.auth));
    let store = Arc::new(SessionStore::new(resolver));
    let bus = AuthEventBus::new();
    let mut rx = bus.subscribe();

    let persisted = load().await?;
    let event = match &persisted {
        Some(s) if s.access_expires_at > Utc::now() => {
            AuthEvent::SignedIn(Identity::new(&s.email, &s.access_token))
        }
        _ => AuthEvent::SignedOut,
    };
    bus.publish(event);

    if let Ok(seq_event) = rx.try_recv() {
        store.apply(seq_event);
    } else {
        // No event observed; mark the session ready as signed out.
        store.apply(SeqEvent {
            seq: bus.current_seq() + 1,
            event: AuthEvent::SignedOut,
        });
    }

    Ok((store, persisted))
}
