//! Integration tests for the video catalog.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn listing_requires_authentication() {
    let app = helpers::TestApp::new().await;

    // Anonymous browsing gets 401, not an empty list.
    let response = app.request("GET", "/api/videos", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_creates_and_any_user_sees_it() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;
    let user = app.access_token("viewer@example.com", "password123").await;

    let id = app.create_video(&admin, "Launch Highlights").await;

    let response = app.request("GET", "/api/videos", None, Some(&user)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total"], 1);
    assert_eq!(response.body["data"]["items"][0]["id"], id.to_string());

    let response = app
        .request("GET", &format!("/api/videos/{id}"), None, Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Launch Highlights");
}

#[tokio::test]
async fn unknown_video_is_404() {
    let app = helpers::TestApp::new().await;
    let user = app.access_token("viewer@example.com", "password123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/videos/{}", Uuid::new_v4()),
            None,
            Some(&user),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_filters_case_insensitively() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;
    app.create_video(&admin, "Rust in Production").await;
    app.create_video(&admin, "Cooking Basics").await;

    let response = app
        .request("GET", "/api/videos?q=rust", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total"], 1);
    assert_eq!(
        response.body["data"]["items"][0]["title"],
        "Rust in Production"
    );
}

#[tokio::test]
async fn admin_updates_a_video() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;
    let id = app.create_video(&admin, "Draft Title").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/videos/{id}"),
            Some(serde_json::json!({ "title": "Final Title" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "Final Title");
    // Untouched fields survive a partial update.
    assert_eq!(
        response.body["data"]["description"],
        "Draft Title description"
    );
}

#[tokio::test]
async fn admin_deletes_a_video() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;
    let id = app.create_video(&admin, "Short Lived").await;

    let response = app
        .request("DELETE", &format!("/api/videos/{id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/videos/{id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upload_stores_media_and_serves_it() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;

    let response = app
        .multipart(
            "/api/videos/upload",
            &admin,
            &[
                ("title", None, b"Uploaded Clip".as_slice()),
                ("description", None, b"From the test suite".as_slice()),
                ("video", Some("clip.mp4"), b"fake mp4 bytes".as_slice()),
            ],
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Upload failed: {:?}",
        response.body
    );

    let video_url = response.body["data"]["video_url"].as_str().unwrap();
    assert!(video_url.starts_with("/media/videos/"));
    assert!(video_url.ends_with("clip.mp4"));

    // The stored file exists under the data root.
    let key = app.state.storage.key_for_url(video_url).unwrap();
    let path = std::path::Path::new(&app.state.config.storage.data_root).join(&key);
    assert!(path.exists(), "stored media missing at {}", path.display());

    // And it is served back over the static media route.
    let served = app.request("GET", video_url, None, None).await;
    assert_eq!(served.status, StatusCode::OK);
}

#[tokio::test]
async fn upload_without_video_file_is_rejected() {
    let app = helpers::TestApp::new().await;
    let admin = app.access_token("admin@example.com", "password123").await;

    let response = app
        .multipart(
            "/api/videos/upload",
            &admin,
            &[("title", None, b"No File".as_slice())],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
