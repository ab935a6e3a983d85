//! Core traits defined in `streamhub-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
