//! # streamhub-core
//!
//! Core crate for StreamHub. Contains the unified error system,
//! configuration schemas, and the storage provider trait.
//!
//! This crate has **no** internal dependencies on other StreamHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
