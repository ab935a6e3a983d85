//! # streamhub-store
//!
//! Backing store abstraction for users and videos.
//!
//! The repository traits are the black-box seam over the external
//! backing store; the in-memory implementations back a single-process
//! deployment and the test suite. Consistency is whatever the chosen
//! implementation provides.

pub mod user;
pub mod video;

pub use user::{MemoryUserRepository, UserRepository};
pub use video::{MemoryVideoRepository, VideoRepository};
