//! Storage manager: provider selection, key generation, public URLs.

use std::sync::Arc;

use bytes::Bytes;
use uuid::Uuid;

use streamhub_core::config::storage::StorageConfig;
use streamhub_core::result::AppResult;
use streamhub_core::traits::storage::StorageProvider;

use crate::providers::local::LocalStorageProvider;

/// Wraps a [`StorageProvider`] and derives durable public URLs for
/// stored media.
#[derive(Debug, Clone)]
pub struct StorageManager {
    provider: Arc<dyn StorageProvider>,
    public_base_path: String,
}

impl StorageManager {
    /// Create a manager over the local filesystem provider described by
    /// the storage configuration.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(&config.data_root).await?;
        Ok(Self {
            provider: Arc::new(provider),
            public_base_path: config.public_base_path.trim_end_matches('/').to_string(),
        })
    }

    /// Create a manager over an explicit provider (tests, future CDN
    /// backends).
    pub fn with_provider(provider: Arc<dyn StorageProvider>, public_base_path: &str) -> Self {
        Self {
            provider,
            public_base_path: public_base_path.trim_end_matches('/').to_string(),
        }
    }

    /// Store an uploaded media file and return its durable public URL.
    ///
    /// Keys are prefixed with a fresh UUID so an upload can never
    /// overwrite an earlier file with the same name.
    pub async fn store_media(
        &self,
        category: &str,
        original_filename: &str,
        data: Bytes,
    ) -> AppResult<String> {
        let filename = sanitize_filename(original_filename);
        let key = format!("{category}/{}-{filename}", Uuid::new_v4());
        self.provider.write(&key, data).await?;
        Ok(self.public_url(&key))
    }

    /// Delete a stored object by its storage key.
    pub async fn delete(&self, key: &str) -> AppResult<()> {
        self.provider.delete(key).await
    }

    /// Whether the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// The public URL under which a storage key is served.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_path, key.trim_start_matches('/'))
    }

    /// Map a public URL back to its storage key, if it belongs to this
    /// manager's base path.
    pub fn key_for_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&format!("{}/", self.public_base_path))
            .map(str::to_string)
    }
}

/// Keep filenames to a safe charset; everything else becomes '_'.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "upload.bin".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StorageConfig {
        StorageConfig {
            data_root: std::env::temp_dir()
                .join(format!("streamhub-manager-test-{}", Uuid::new_v4()))
                .to_string_lossy()
                .into_owned(),
            ..StorageConfig::default()
        }
    }

    #[tokio::test]
    async fn store_media_returns_public_url() {
        let manager = StorageManager::new(&config()).await.unwrap();
        let url = manager
            .store_media("videos", "My Clip!.mp4", Bytes::from_static(b"data"))
            .await
            .unwrap();

        assert!(url.starts_with("/media/videos/"));
        assert!(url.ends_with("My_Clip_.mp4"));

        let key = manager.key_for_url(&url).unwrap();
        manager.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn key_for_url_rejects_foreign_urls() {
        let manager = StorageManager::new(&config()).await.unwrap();
        assert!(manager.key_for_url("https://cdn.example.com/x.mp4").is_none());
        assert!(manager.key_for_url("/media/videos/x.mp4").is_some());
    }

    #[test]
    fn filenames_are_sanitized() {
        assert_eq!(sanitize_filename("a b/c.mp4"), "a_b_c.mp4");
        assert_eq!(sanitize_filename(""), "upload.bin");
    }
}
