//! Video catalog entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published video record.
///
/// The binary media itself lives in the storage backend; the record only
/// carries the durable URL returned at upload time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Stable identifier.
    pub id: Uuid,
    /// Title shown in the feed.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Durable URL of the video media.
    pub video_url: String,
    /// Optional durable URL of the thumbnail image.
    pub thumbnail_url: Option<String>,
    /// Id of the admin who published the record.
    pub uploaded_by: Uuid,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
    /// Last metadata edit.
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Create a new record with a fresh id and current timestamps.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        video_url: impl Into<String>,
        uploaded_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            video_url: video_url.into(),
            thumbnail_url: None,
            uploaded_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match over title and description.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.description.to_lowercase().contains(&q)
    }
}

/// Partial update applied to an existing record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoUpdate {
    /// New title, if changed.
    pub title: Option<String>,
    /// New description, if changed.
    pub description: Option<String>,
    /// New thumbnail URL, if changed.
    pub thumbnail_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_match_is_case_insensitive() {
        let video = Video::new("Rust Tutorial", "Ownership basics", "/media/x.mp4", Uuid::new_v4());
        assert!(video.matches("rust"));
        assert!(video.matches("OWNERSHIP"));
        assert!(!video.matches("python"));
    }
}
