//! Route definitions for the StreamHub HTTP API.
//!
//! All API routes are mounted under `/api`; stored media is served
//! statically under the configured public base path.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(video_routes())
        .merge(health_routes());

    let media_service = ServeDir::new(&state.config.storage.data_root);
    let media_path = state.config.storage.public_base_path.clone();

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .nest_service(&media_path, media_service)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, refresh, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Video catalog CRUD and upload
fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/videos", get(handlers::video::list_videos))
        .route("/videos", post(handlers::video::create_video))
        .route("/videos/{id}", get(handlers::video::get_video))
        .route("/videos/{id}", put(handlers::video::update_video))
        .route("/videos/{id}", delete(handlers::video::delete_video))
        .route("/videos/upload", post(handlers::video::upload_video))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
