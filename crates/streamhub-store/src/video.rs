//! Video repository trait and in-memory implementation.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use streamhub_core::error::AppError;
use streamhub_core::result::AppResult;
use streamhub_entity::video::{Video, VideoUpdate};

/// Access to the video catalog.
#[async_trait]
pub trait VideoRepository: Send + Sync + 'static {
    /// Insert a new record.
    async fn insert(&self, video: Video) -> AppResult<Video>;

    /// Fetch one record.
    async fn get(&self, id: Uuid) -> AppResult<Option<Video>>;

    /// List all records, newest first.
    async fn list(&self) -> AppResult<Vec<Video>>;

    /// List records matching a search query, newest first.
    async fn search(&self, query: &str) -> AppResult<Vec<Video>>;

    /// Apply a partial update. Fails with `NotFound` for unknown ids.
    async fn update(&self, id: Uuid, changes: VideoUpdate) -> AppResult<Video>;

    /// Delete a record. Fails with `NotFound` for unknown ids.
    async fn delete(&self, id: Uuid) -> AppResult<Video>;
}

/// In-memory video repository.
#[derive(Debug, Default)]
pub struct MemoryVideoRepository {
    videos: DashMap<Uuid, Video>,
}

impl MemoryVideoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted_newest_first(mut videos: Vec<Video>) -> Vec<Video> {
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        videos
    }
}

#[async_trait]
impl VideoRepository for MemoryVideoRepository {
    async fn insert(&self, video: Video) -> AppResult<Video> {
        self.videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Video>> {
        Ok(self.videos.get(&id).map(|v| v.clone()))
    }

    async fn list(&self) -> AppResult<Vec<Video>> {
        let videos = self.videos.iter().map(|v| v.clone()).collect();
        Ok(Self::sorted_newest_first(videos))
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Video>> {
        let query = query.trim();
        if query.is_empty() {
            return self.list().await;
        }
        let videos = self
            .videos
            .iter()
            .filter(|v| v.matches(query))
            .map(|v| v.clone())
            .collect();
        Ok(Self::sorted_newest_first(videos))
    }

    async fn update(&self, id: Uuid, changes: VideoUpdate) -> AppResult<Video> {
        match self.videos.get_mut(&id) {
            Some(mut video) => {
                if let Some(title) = changes.title {
                    video.title = title;
                }
                if let Some(description) = changes.description {
                    video.description = description;
                }
                if let Some(thumbnail_url) = changes.thumbnail_url {
                    video.thumbnail_url = Some(thumbnail_url);
                }
                video.updated_at = Utc::now();
                Ok(video.clone())
            }
            None => Err(AppError::not_found(format!("No video with id {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<Video> {
        match self.videos.remove(&id) {
            Some((_, video)) => Ok(video),
            None => Err(AppError::not_found(format!("No video with id {id}"))),
        }
    }
}
