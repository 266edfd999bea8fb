// tests/integration/tasks/day_lock_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::app_helper::{read_json, setup_app};
use crate::common::auth_helper::{empty_request, json_request, setup_authenticated_user};
use crate::common::test_data::{create_task, end_day, get, task_payload, TEST_DATE};

#[tokio::test]
async fn test_ended_day_rejects_task_mutations() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Before the end", 2, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();

    let (status, _) = end_day(&app, &user, TEST_DATE).await;
    assert_eq!(status, StatusCode::OK);

    // 作成
    let req = json_request(
        "POST",
        "/api/tasks",
        Some(&user.token),
        &task_payload("Too late", 1, TEST_DATE),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Cannot add tasks to an ended day");

    // 更新
    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        Some(&user.token),
        &json!({ "title": "Renamed", "completed_items": 2 }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Cannot update tasks for an ended day");

    // 進捗
    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}/progress", task_id),
        Some(&user.token),
        &json!({ "completed_items": 2 }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Cannot update tasks for an ended day");

    // 削除
    let req = empty_request("DELETE", &format!("/api/tasks/{}", task_id), Some(&user.token));
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Cannot delete tasks from an ended day");

    // 拒否された変更は保存されていない
    let (status, json) = get(&app, &format!("/api/tasks/{}", task_id), Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Before the end");
    assert_eq!(json["data"]["completed_items"], 0);
    assert_eq!(json["data"]["completion_percentage"], 0);

    let (status, json) = get(
        &app,
        &format!("/api/tasks?date={}", TEST_DATE),
        Some(&user.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let tasks = json["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], task_id);
}

#[tokio::test]
async fn test_other_days_stay_editable() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;

    let (status, _) = end_day(&app, &user, TEST_DATE).await;
    assert_eq!(status, StatusCode::OK);

    create_task(&app, &user, "Next day", 1, "2024-02-15").await;
}

#[tokio::test]
async fn test_lock_is_per_user() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let other = setup_authenticated_user(&app).await;

    let (status, _) = end_day(&app, &user, TEST_DATE).await;
    assert_eq!(status, StatusCode::OK);

    create_task(&app, &other, "Still open for me", 1, TEST_DATE).await;
}
