//! Video catalog handlers.
//!
//! Every mutation re-checks the admin role through
//! [`streamhub_auth::authorize`] before the repository or storage is
//! touched. The client-side route guard never short-circuits this.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use streamhub_auth::authorize;
use streamhub_core::error::AppError;
use streamhub_entity::video::{Video, VideoUpdate};

use crate::dto::request::{CreateVideoRequest, ListVideosQuery, UpdateVideoRequest};
use crate::dto::response::{ApiResponse, MessageResponse, VideoListResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/videos?q=...
pub async fn list_videos(
    State(state): State<AppState>,
    // Any signed-in user may browse; the extractor already rejected
    // anonymous requests with 401 rather than an empty list.
    _auth: AuthUser,
    Query(query): Query<ListVideosQuery>,
) -> Result<Json<ApiResponse<VideoListResponse>>, ApiError> {
    let items = match query.q.as_deref() {
        Some(q) => state.videos.search(q).await?,
        None => state.videos.list().await?,
    };

    let total = items.len();
    Ok(Json(ApiResponse::ok(VideoListResponse { items, total })))
}

/// GET /api/videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Video>>, ApiError> {
    let video = state
        .videos
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No video with id {id}")))?;
    Ok(Json(ApiResponse::ok(video)))
}

/// POST /api/videos (admin)
pub async fn create_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Video>>), ApiError> {
    authorize::require_admin(&auth)?;
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid video: {e}")))?;

    let mut video = Video::new(req.title, req.description, req.video_url, auth.user_id);
    video.thumbnail_url = req.thumbnail_url;

    let video = state.videos.insert(video).await?;
    tracing::info!(video_id = %video.id, by = %auth.email, "Video created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(video))))
}

/// PUT /api/videos/{id} (admin)
pub async fn update_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateVideoRequest>,
) -> Result<Json<ApiResponse<Video>>, ApiError> {
    authorize::require_admin(&auth)?;
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid update: {e}")))?;

    let video = state
        .videos
        .update(
            id,
            VideoUpdate {
                title: req.title,
                description: req.description,
                thumbnail_url: req.thumbnail_url,
            },
        )
        .await?;

    tracing::info!(video_id = %video.id, by = %auth.email, "Video updated");
    Ok(Json(ApiResponse::ok(video)))
}

/// DELETE /api/videos/{id} (admin)
pub async fn delete_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    authorize::require_admin(&auth)?;

    let video = state.videos.delete(id).await?;

    // Remove locally stored media; URLs pointing at an external CDN are
    // left alone.
    for url in std::iter::once(&video.video_url).chain(video.thumbnail_url.iter()) {
        if let Some(key) = state.storage.key_for_url(url)
            && let Err(e) = state.storage.delete(&key).await
        {
            tracing::warn!(video_id = %id, key, error = %e, "Failed to delete stored media");
        }
    }

    tracing::info!(video_id = %id, by = %auth.email, "Video deleted");
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Video deleted".to_string(),
    })))
}

/// POST /api/videos/upload (admin, multipart)
///
/// Fields: `title` (required), `description`, `video` (required file),
/// `thumbnail` (optional file).
pub async fn upload_video(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Video>>), ApiError> {
    authorize::require_admin(&auth)?;

    let mut title: Option<String> = None;
    let mut description = String::new();
    let mut video_url: Option<String> = None;
    let mut thumbnail_url: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        match field.name().unwrap_or_default() {
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(format!("Invalid title field: {e}")))?,
                );
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid description field: {e}")))?;
            }
            "video" => {
                let filename = field.file_name().unwrap_or("video.mp4").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid video field: {e}")))?;
                video_url = Some(state.storage.store_media("videos", &filename, data).await?);
            }
            "thumbnail" => {
                let filename = field.file_name().unwrap_or("thumbnail.jpg").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid thumbnail field: {e}")))?;
                thumbnail_url =
                    Some(state.storage.store_media("thumbnails", &filename, data).await?);
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    let title = title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::validation("A non-empty 'title' field is required"))?;
    let video_url =
        video_url.ok_or_else(|| AppError::validation("A 'video' file field is required"))?;

    let mut video = Video::new(title, description, video_url, auth.user_id);
    video.thumbnail_url = thumbnail_url;

    let video = state.videos.insert(video).await?;
    tracing::info!(video_id = %video.id, by = %auth.email, "Video uploaded");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(video))))
}
