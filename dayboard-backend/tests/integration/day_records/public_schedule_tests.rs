// tests/integration/day_records/public_schedule_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::app_helper::{read_json, setup_app};
use crate::common::auth_helper::{json_request, setup_authenticated_user, TestUser};
use crate::common::test_data::{create_task, end_day, get, TEST_DATE};

async fn hide_profile(app: &axum::Router, user: &TestUser) {
    let req = json_request(
        "PATCH",
        "/api/auth/me/visibility",
        Some(&user.token),
        &json!({ "profile_visible": false }),
    );
    let (status, _) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_calendar_of_visible_user() {
    let (app, _db) = setup_app().await;
    let owner = setup_authenticated_user(&app).await;
    let viewer = setup_authenticated_user(&app).await;

    end_day(&app, &owner, TEST_DATE).await;

    let (status, json) = get(
        &app,
        &format!(
            "/api/day-records/public/{}/calendar?month=2&year=2024",
            owner.id
        ),
        Some(&viewer.token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["user"]["id"], owner.id.to_string());
    assert_eq!(json["data"]["user"]["username"], owner.username.as_str());
    // 公開ビューにメールアドレスは含めない
    assert!(json["data"]["user"].get("email").is_none());
    let records = json["data"]["day_records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["date"], TEST_DATE);
}

#[tokio::test]
async fn test_hidden_profile_is_not_found() {
    let (app, _db) = setup_app().await;
    let owner = setup_authenticated_user(&app).await;
    let viewer = setup_authenticated_user(&app).await;
    create_task(&app, &owner, "Secret", 1, TEST_DATE).await;
    hide_profile(&app, &owner).await;

    let (status, json) = get(
        &app,
        &format!("/api/day-records/public/{}/calendar", owner.id),
        Some(&viewer.token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "User not found or profile not visible");

    let (status, json) = get(
        &app,
        &format!("/api/tasks/public/{}", owner.id),
        Some(&viewer.token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "User not found or profile not visible");
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let (app, _db) = setup_app().await;
    let viewer = setup_authenticated_user(&app).await;

    let (status, _) = get(
        &app,
        &format!("/api/day-records/public/{}/calendar", Uuid::new_v4()),
        Some(&viewer.token),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_tasks_filtered_by_date() {
    let (app, _db) = setup_app().await;
    let owner = setup_authenticated_user(&app).await;
    let viewer = setup_authenticated_user(&app).await;
    create_task(&app, &owner, "Shared", 2, TEST_DATE).await;
    create_task(&app, &owner, "Later", 2, "2024-02-20").await;

    let (status, json) = get(
        &app,
        &format!("/api/tasks/public/{}?date={}", owner.id, TEST_DATE),
        Some(&viewer.token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let tasks = json["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Shared");
}

#[tokio::test]
async fn test_visible_users_sorted_and_excludes_hidden() {
    let (app, _db) = setup_app().await;
    let first = setup_authenticated_user(&app).await;
    let second = setup_authenticated_user(&app).await;
    let hidden = setup_authenticated_user(&app).await;
    hide_profile(&app, &hidden).await;

    let (status, json) = get(&app, "/api/day-records/users", Some(&first.token)).await;

    assert_eq!(status, StatusCode::OK);
    let usernames: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();

    let mut expected = vec![first.username.as_str(), second.username.as_str()];
    expected.sort();
    assert_eq!(usernames, expected);
    assert!(!usernames.contains(&hidden.username.as_str()));
}
