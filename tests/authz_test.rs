//! Integration tests for server-side authorization.
//!
//! Privileged endpoints must re-check the admin role on every request,
//! with 401 for missing/invalid credentials and 403 for a valid
//! non-admin credential.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn anonymous_mutations_are_401() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/videos",
            Some(serde_json::json!({
                "title": "Sneaky",
                "video_url": "https://cdn.example.com/x.mp4",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_401_not_403() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/videos",
            Some(serde_json::json!({
                "title": "Sneaky",
                "video_url": "https://cdn.example.com/x.mp4",
            })),
            Some("garbage.token.here"),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_admin_cannot_create() {
    let app = helpers::TestApp::new().await;
    let user = app.access_token("viewer@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/videos",
            Some(serde_json::json!({
                "title": "Sneaky",
                "video_url": "https://cdn.example.com/x.mp4",
            })),
            Some(&user),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn non_admin_delete_is_403_and_leaves_the_record() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;
    let user = app.access_token("viewer@example.com", "password123").await;
    let id = app.create_video(&admin, "Protected").await;

    let response = app
        .request("DELETE", &format!("/api/videos/{id}"), None, Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // The record survived the denied attempt.
    let response = app
        .request("GET", &format!("/api/videos/{id}"), None, Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn non_admin_cannot_update() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;
    let user = app.access_token("viewer@example.com", "password123").await;
    let id = app.create_video(&admin, "Protected").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/videos/{id}"),
            Some(serde_json::json!({ "title": "Defaced" })),
            Some(&user),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", &format!("/api/videos/{id}"), None, Some(&user))
        .await;
    assert_eq!(response.body["data"]["title"], "Protected");
}

#[tokio::test]
async fn non_admin_cannot_upload() {
    let app = helpers::TestApp::new().await;
    let user = app.access_token("viewer@example.com", "password123").await;

    let response = app
        .multipart(
            "/api/videos/upload",
            &user,
            &[
                ("title", None, b"Sneaky Upload".as_slice()),
                ("video", Some("clip.mp4"), b"bytes".as_slice()),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn revoked_admin_token_is_401() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Even a formerly-admin token is unauthenticated after revocation.
    let response = app
        .request(
            "POST",
            "/api/videos",
            Some(serde_json::json!({
                "title": "Too Late",
                "video_url": "https://cdn.example.com/x.mp4",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
