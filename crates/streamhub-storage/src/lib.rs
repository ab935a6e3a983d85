//! # streamhub-storage
//!
//! Media storage for StreamHub: the [`manager::StorageManager`] wraps a
//! [`streamhub_core::traits::StorageProvider`] implementation and turns
//! stored paths into durable public URLs.

pub mod manager;
pub mod providers;

pub use manager::StorageManager;
pub use providers::local::LocalStorageProvider;
