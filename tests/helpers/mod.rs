//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use streamhub_api::AppState;
use streamhub_core::config::AppConfig;

const MULTIPART_BOUNDARY: &str = "streamhub-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state for direct repository access
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with in-memory repositories and a
    /// throwaway media directory.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.admin_emails = vec!["admin@example.com".to_string()];
        config.storage.data_root = std::env::temp_dir()
            .join(format!("streamhub-it-{}", Uuid::new_v4()))
            .to_string_lossy()
            .into_owned();

        let state = streamhub_api::app::build_state(config)
            .await
            .expect("Failed to build test app state");
        let router = streamhub_api::build_app(state.clone());

        Self { router, state }
    }

    /// Register an account and return its login token pair body.
    pub async fn register_and_login(&self, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.body["data"].clone()
    }

    /// Register an account and return just the access token.
    pub async fn access_token(&self, email: &str, password: &str) -> String {
        self.register_and_login(email, password).await["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create a video directly through the API as the given admin.
    pub async fn create_video(&self, admin_token: &str, title: &str) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/videos",
                Some(serde_json::json!({
                    "title": title,
                    "description": format!("{title} description"),
                    "video_url": "https://cdn.example.com/clip.mp4",
                })),
                Some(admin_token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Video creation failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .expect("No video id in response")
    }

    /// Make a JSON HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a multipart POST request to the test app.
    ///
    /// Each part is (field name, optional filename, content).
    pub async fn multipart(
        &self,
        path: &str,
        token: &str,
        parts: &[(&str, Option<&str>, &[u8])],
    ) -> TestResponse {
        let mut body = Vec::new();
        for (name, filename, content) in parts {
            body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
            match filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            )
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::from(body))
            .expect("Failed to build multipart request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
