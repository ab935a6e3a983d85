//! # streamhub-entity
//!
//! Domain entities shared across the StreamHub crates.

pub mod user;
pub mod video;

pub use user::{Role, User};
pub use video::{Video, VideoUpdate};
