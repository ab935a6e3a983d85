//! Request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Account email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password; minimum length is enforced against config.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
    /// Optional display name.
    pub display_name: Option<String>,
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

/// Body for `POST /api/auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token issued at login.
    pub refresh_token: String,
}

/// Optional body for `POST /api/auth/logout`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Refresh token to revoke alongside the access token.
    pub refresh_token: Option<String>,
}

/// Body for `POST /api/videos` (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVideoRequest {
    /// Title shown in the feed.
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Durable URL of the media (e.g. a CDN URL).
    #[validate(length(min = 1, message = "must not be empty"))]
    pub video_url: String,
    /// Optional thumbnail URL.
    pub thumbnail_url: Option<String>,
}

/// Body for `PUT /api/videos/{id}` (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    /// New title, if changed.
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: Option<String>,
    /// New description, if changed.
    pub description: Option<String>,
    /// New thumbnail URL, if changed.
    pub thumbnail_url: Option<String>,
}

/// Query for `GET /api/videos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListVideosQuery {
    /// Case-insensitive substring filter over title and description.
    pub q: Option<String>,
}
