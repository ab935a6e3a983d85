//! Thin HTTP client over the StreamHub API.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use streamhub_core::error::AppError;

/// Error payload returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Success payload wrapper used by every API endpoint.
#[derive(Debug, Deserialize)]
struct ApiSuccessBody<T> {
    data: T,
}

/// HTTP client bound to a server base URL and an optional bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<streamhub_api::dto::response::LoginResponse, AppError> {
        self.post_json(
            "/api/auth/login",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<streamhub_api::dto::response::UserResponse, AppError> {
        self.post_json(
            "/api/auth/register",
            &json!({ "email": email, "password": password, "display_name": display_name }),
        )
        .await
    }

    pub async fn logout(&self, refresh_token: Option<&str>) -> Result<(), AppError> {
        let _: streamhub_api::dto::response::MessageResponse = self
            .post_json(
                "/api/auth/logout",
                &json!({ "refresh_token": refresh_token }),
            )
            .await?;
        Ok(())
    }

    pub async fn me(&self) -> Result<streamhub_api::dto::response::UserResponse, AppError> {
        self.get("/api/auth/me").await
    }

    pub async fn list_videos(
        &self,
        query: Option<&str>,
    ) -> Result<streamhub_api::dto::response::VideoListResponse, AppError> {
        let mut request = self.http.get(format!("{}/api/videos", self.base_url));
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }
        self.send(self.authorize(request)).await
    }

    pub async fn get_video(
        &self,
        id: &str,
    ) -> Result<streamhub_entity::video::Video, AppError> {
        self.get(&format!("/api/videos/{id}")).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.http.get(format!("{}{}", self.base_url, path));
        self.send(self.authorize(request)).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, AppError> {
        let request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        self.send(self.authorize(request)).await
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::upstream(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .map(|b| b.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(match status.as_u16() {
                401 => AppError::unauthenticated(message),
                403 => AppError::forbidden(message),
                404 => AppError::not_found(message),
                _ => AppError::upstream(message),
            });
        }

        let body: ApiSuccessBody<T> = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::upstream(format!("Unexpected response shape: {}", e)))?;
        Ok(body.data)
    }
}
