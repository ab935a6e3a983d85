//! # streamhub-api
//!
//! The StreamHub HTTP API: router, handlers, extractors, middleware,
//! and the `AppError` → HTTP response mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
