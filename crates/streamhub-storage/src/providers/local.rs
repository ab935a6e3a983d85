//! Local filesystem storage provider.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use streamhub_core::error::{AppError, ErrorKind};
use streamhub_core::result::AppResult;
use streamhub_core::traits::storage::{StorageObjectMeta, StorageProvider};

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Root directory for all stored files.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The root directory files are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path to an absolute path within the root.
    ///
    /// Rejects paths that would escape the root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let clean = path.trim_start_matches('/');
        let relative = Path::new(clean);
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
        {
            return Err(AppError::validation(format!("Invalid storage path: {path}")));
        }
        Ok(self.root.join(relative))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        self.ensure_parent(&full_path).await?;
        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write file: {path}"), e)
        })?;
        debug!(path, bytes = data.len(), "Stored media file");
        Ok(())
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path)?;
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to read file: {path}"), e)
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn stat(&self, path: &str) -> AppResult<StorageObjectMeta> {
        let full_path = self.resolve(path)?;
        let meta = fs::metadata(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to stat file: {path}"), e)
            }
        })?;
        Ok(StorageObjectMeta {
            path: path.to_string(),
            size_bytes: meta.len(),
            last_modified: meta.modified().ok().map(chrono::DateTime::from),
        })
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path)?;
        Ok(full_path.exists())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::not_found(format!("File not found: {path}")))
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {path}"),
                e,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn provider() -> LocalStorageProvider {
        let root = std::env::temp_dir().join(format!("streamhub-storage-test-{}", Uuid::new_v4()));
        LocalStorageProvider::new(root.to_str().unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn write_read_delete_round_trip() {
        let provider = provider().await;

        provider
            .write("videos/clip.mp4", Bytes::from_static(b"movie bytes"))
            .await
            .unwrap();
        assert!(provider.exists("videos/clip.mp4").await.unwrap());

        let data = provider.read_bytes("videos/clip.mp4").await.unwrap();
        assert_eq!(&data[..], b"movie bytes");

        let meta = provider.stat("videos/clip.mp4").await.unwrap();
        assert_eq!(meta.size_bytes, 11);

        provider.delete("videos/clip.mp4").await.unwrap();
        assert!(!provider.exists("videos/clip.mp4").await.unwrap());
    }

    #[tokio::test]
    async fn traversal_paths_are_rejected() {
        let provider = provider().await;
        let err = provider
            .write("../outside.bin", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let provider = provider().await;
        let err = provider.read_bytes("videos/missing.mp4").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
