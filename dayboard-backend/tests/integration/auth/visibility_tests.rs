// tests/integration/auth/visibility_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::app_helper::{read_json, setup_app};
use crate::common::auth_helper::{json_request, setup_authenticated_user};
use crate::common::test_data::get;

#[tokio::test]
async fn test_toggle_profile_visibility() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;

    let req = json_request(
        "PATCH",
        "/api/auth/me/visibility",
        Some(&user.token),
        &json!({ "profile_visible": false }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["profile_visible"], false);

    let (_, json) = get(&app, "/api/auth/me", Some(&user.token)).await;
    assert_eq!(json["data"]["profile_visible"], false);

    let req = json_request(
        "PATCH",
        "/api/auth/me/visibility",
        Some(&user.token),
        &json!({ "profile_visible": true }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["profile_visible"], true);
}

#[tokio::test]
async fn test_visibility_requires_authentication() {
    let (app, _db) = setup_app().await;

    let req = json_request(
        "PATCH",
        "/api/auth/me/visibility",
        None,
        &json!({ "profile_visible": false }),
    );
    let (status, _) = read_json(app.clone().oneshot(req).await.unwrap()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_visibility_rejects_malformed_body() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;

    let req = json_request(
        "PATCH",
        "/api/auth/me/visibility",
        Some(&user.token),
        &json!({ "profile_visible": "nope" }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}
