// tests/integration/system_tests.rs

use axum::http::StatusCode;

use crate::common::app_helper::setup_app;
use crate::common::test_data::get;

#[tokio::test]
async fn test_health_check_reports_database_connection() {
    let (app, _db) = setup_app().await;

    let (status, json) = get(&app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "healthy");
    assert_eq!(json["data"]["database"], "up");
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let (app, _db) = setup_app().await;

    let (status, _) = get(&app, "/api/unknown", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
