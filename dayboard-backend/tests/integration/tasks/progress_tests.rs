// tests/integration/tasks/progress_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::app_helper::{read_json, setup_app};
use crate::common::auth_helper::{json_request, setup_authenticated_user};
use crate::common::test_data::{create_task, set_progress, TEST_DATE};

#[tokio::test]
async fn test_progress_update_recomputes_percentage() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Flashcards", 4, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();

    let updated = set_progress(&app, &user, task_id, 3).await;
    assert_eq!(updated["completed_items"], 3);
    assert_eq!(updated["completion_percentage"], 75);
    assert_eq!(updated["is_completed"], false);

    let updated = set_progress(&app, &user, task_id, 4).await;
    assert_eq!(updated["completion_percentage"], 100);
    assert_eq!(updated["is_completed"], true);

    // 戻すと未完了に戻る
    let updated = set_progress(&app, &user, task_id, 1).await;
    assert_eq!(updated["completion_percentage"], 25);
    assert_eq!(updated["is_completed"], false);
}

#[tokio::test]
async fn test_progress_rounds_half_up() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Thirds", 3, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();

    assert_eq!(set_progress(&app, &user, task_id, 1).await["completion_percentage"], 33);
    assert_eq!(set_progress(&app, &user, task_id, 2).await["completion_percentage"], 67);
}

#[tokio::test]
async fn test_progress_above_total_is_rejected() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Pages", 4, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();

    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}/progress", task_id),
        Some(&user.token),
        &json!({ "completed_items": 5 }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Completed items cannot exceed total items");
}

#[tokio::test]
async fn test_negative_progress_is_rejected() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Pages", 4, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();

    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}/progress", task_id),
        Some(&user.token),
        &json!({ "completed_items": -1 }),
    );
    let (status, _) = read_json(app.clone().oneshot(req).await.unwrap()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shrinking_total_clamps_completed_items() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Exercises", 10, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();
    set_progress(&app, &user, task_id, 8).await;

    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        Some(&user.token),
        &json!({ "total_items": 5 }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total_items"], 5);
    assert_eq!(json["data"]["completed_items"], 5);
    assert_eq!(json["data"]["completion_percentage"], 100);
    assert_eq!(json["data"]["is_completed"], true);
}

#[tokio::test]
async fn test_update_with_completed_above_new_total_is_rejected() {
    let (app, _db) = setup_app().await;
    let user = setup_authenticated_user(&app).await;
    let task = create_task(&app, &user, "Exercises", 10, TEST_DATE).await;
    let task_id = task["id"].as_str().unwrap();

    let req = json_request(
        "PUT",
        &format!("/api/tasks/{}", task_id),
        Some(&user.token),
        &json!({ "total_items": 4, "completed_items": 6 }),
    );
    let (status, json) = read_json(app.clone().oneshot(req).await.unwrap()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Completed items cannot exceed total items");
}
