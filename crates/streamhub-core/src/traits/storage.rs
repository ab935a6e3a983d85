//! Storage provider trait for pluggable media storage backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Metadata about a stored media object.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StorageObjectMeta {
    /// Path within the storage provider.
    pub path: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modified timestamp.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// Trait for media storage backends.
///
/// The local filesystem implementation lives in `streamhub-storage`.
/// A CDN-backed provider would implement the same seam; callers only
/// consume the durable URL derived from the stored path.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to a file at the given path.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Read a file into memory as a complete byte vector.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Return metadata for a stored object.
    async fn stat(&self, path: &str) -> AppResult<StorageObjectMeta>;

    /// Whether an object exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Delete a file at the given path.
    async fn delete(&self, path: &str) -> AppResult<()>;
}
