//! Application builder — wires state + router into an Axum app and runs
//! the server.

use std::sync::Arc;

use axum::Router;

use streamhub_auth::allowlist::AdminAllowlist;
use streamhub_auth::jwt::{JwtDecoder, JwtEncoder};
use streamhub_auth::password::PasswordHasher;
use streamhub_auth::resolver::RoleResolver;
use streamhub_core::config::AppConfig;
use streamhub_core::error::AppError;
use streamhub_storage::manager::StorageManager;
use streamhub_store::user::MemoryUserRepository;
use streamhub_store::video::MemoryVideoRepository;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from a fully-constructed state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the application state from configuration.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let storage = StorageManager::new(&config.storage).await?;

    let allowlist = AdminAllowlist::from_config(&config.auth);
    if allowlist.is_empty() {
        tracing::warn!("Admin allowlist is empty; no account can perform admin actions");
    } else {
        tracing::info!(admins = allowlist.len(), "Admin allowlist loaded");
    }

    Ok(AppState {
        jwt_encoder: Arc::new(JwtEncoder::new(&config.auth)),
        jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
        password_hasher: Arc::new(PasswordHasher::new()),
        role_resolver: Arc::new(RoleResolver::new(allowlist)),
        users: Arc::new(MemoryUserRepository::new()),
        videos: Arc::new(MemoryVideoRepository::new()),
        storage: Arc::new(storage),
        config: Arc::new(config),
    })
}

/// Runs the StreamHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StreamHub server...");

    let state = build_state(config).await?;
    let config = Arc::clone(&state.config);
    let app = build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("StreamHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("StreamHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
