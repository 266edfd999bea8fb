// tests/integration/tasks/task_crud_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::app_helper::{read_json, setup_app};
use crate::common::auth_helper::{empty_request, json_request, setup_authenticated_user};
use crate::common::test_data::{create_task, get, task_payload, TEST_DATE};

#[tokio::test]
async fn test_create_task_derives_progress_fields() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;

    let task = create_task(&app, &user, "Read chapters", 4, TEST_DATE).await;

    assert_eq!(task["title"], "Read chapters");
    assert_eq!(task["user_id"], user.id.to_string());
    assert_eq!(task["total_items"], 4);
    assert_eq!(task["completed_items"], 0);
    assert_eq!(task["completion_percentage"], 0);
    assert_eq!(task["is_completed"], false);
    assert_eq!(task["date"], TEST_DATE);
}

#[tokio::test]
async fn test_create_task_accepts_rfc3339_date() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;

    let task = create_task(&app, &user, "Morning run", 1, "2024-02-14T18:30:00Z").await;

    assert_eq!(task["date"], TEST_DATE);
}

#[tokio::test]
async fn test_create_task_requires_authentication() {
    let (app, _db) = setup_app().await;

    let req = json_request("POST", "/api/tasks", None, &task_payload("x", 1, TEST_DATE));
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_create_task_validation_errors() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;

    // 必須フィールド欠落
    let req = json_request(
        "POST",
        "/api/tasks",
        Some(&user.token),
        &json!({ "title": "No items" }),
    );
    let (status, _) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // total_items が 0
    let req = json_request(
        "POST",
        "/api/tasks",
        Some(&user.token),
        &task_payload("Zero", 0, TEST_DATE),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["validation_errors"]["total_items"].is_array());

    // 空白だけのタイトル
    let req = json_request(
        "POST",
        "/api/tasks",
        Some(&user.token),
        &task_payload("   ", 3, TEST_DATE),
    );
    let (status, _) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 日付の形式が不正
    let req = json_request(
        "POST",
        "/api/tasks",
        Some(&user.token),
        &task_payload("Bad date", 3, "14/02/2024"),
    );
    let (status, _) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_update_delete_task() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Write report", 5, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap().to_string();

    let (status, json) = get(&app, &format!("/api/tasks/{}", task_id), Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], task_id.as_str());

    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        Some(&user.token),
        &json!({ "title": "Write final report", "note": "  halfway  " }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Write final report");
    assert_eq!(json["data"]["note"], "halfway");
    assert_eq!(json["data"]["total_items"], 5);

    let req = empty_request("DELETE", &format!("/api/tasks/{}", task_id), Some(&user.token));
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, json) = get(&app, &format!("/api/tasks/{}", task_id), Some(&user.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Task not found");
}

#[tokio::test]
async fn test_update_task_null_clears_description() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Plan sprint", 3, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();
    assert_eq!(task["description"], "Created from integration tests");

    // 未指定なら既存の値を残す
    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        Some(&user.token),
        &json!({ "title": "Plan next sprint" }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["description"], "Created from integration tests");

    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        Some(&user.token),
        &json!({ "description": null }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"]["description"].is_null());
    assert_eq!(json["data"]["title"], "Plan next sprint");
}

#[tokio::test]
async fn test_other_users_task_is_not_found() {
    let (app, _db) = setup_app().await;
    let owner = setup_authenticated_user(&app).await;
    let other = setup_authenticated_user(&app).await;
    let task = create_task(&app, &owner, "Private task", 2, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();

    let (status, _) = get(&app, &format!("/api/tasks/{}", task_id), Some(&other.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        Some(&other.token),
        &json!({ "title": "Hijacked" }),
    );
    let (status, _) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = empty_request("DELETE", &format!("/api/tasks/{}", task_id), Some(&other.token));
    let (status, _) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 所有者からはまだ見える
    let (status, _) = get(&app, &format!("/api/tasks/{}", task_id), Some(&owner.token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_task_id_is_bad_request() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;

    let (status, json) = get(&app, "/api/tasks/not-a-uuid", Some(&user.token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_list_tasks_newest_first_and_filtered_by_date() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;

    let first = create_task(&app, &user, "First", 1, TEST_DATE).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let second = create_task(&app, &user, "Second", 1, TEST_DATE).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let other_day = create_task(&app, &user, "Other day", 1, "2024-02-15").await;

    let (status, json) = get(&app, "/api/tasks", Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            other_day["id"].as_str().unwrap(),
            second["id"].as_str().unwrap(),
            first["id"].as_str().unwrap(),
        ]
    );

    let (status, json) = get(
        &app,
        &format!("/api/tasks?date={}", TEST_DATE),
        Some(&user.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let tasks = json["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t["date"] == TEST_DATE));
}

#[tokio::test]
async fn test_list_tasks_only_returns_own_tasks() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let other = setup_authenticated_user(&app).await;

    create_task(&app, &user, "Mine", 1, TEST_DATE).await;
    create_task(&app, &other, "Theirs", 1, TEST_DATE).await;

    let (_, json) = get(&app, "/api/tasks", Some(&user.token)).await;
    let tasks = json["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Mine");
}
