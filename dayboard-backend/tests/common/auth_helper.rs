// tests/common/auth_helper.rs

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use dayboard_backend::api::dto::auth_dto::RegisterRequest;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::app_helper::read_json;

pub const TEST_PASSWORD: &str = "DayBoard2024";

/// テスト用のユーザー情報
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub token: String,
}

/// 一意なテストユーザーのデータ
pub fn create_test_user_data() -> RegisterRequest {
    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    RegisterRequest {
        username: format!("user_{}", suffix),
        email: format!("user_{}@example.com", suffix),
        password: TEST_PASSWORD.to_string(),
    }
}

/// ユーザー登録を実行し、認証情報を返す
pub async fn register_user(app: &Router, data: RegisterRequest) -> TestUser {
    let req = json_request(
        "POST",
        "/api/auth/register",
        None,
        &serde_json::to_value(&data).unwrap(),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    let (status, json) = read_json(res).await;

    assert_eq!(status, StatusCode::CREATED, "register failed: {}", json);

    TestUser {
        id: Uuid::parse_str(json["data"]["user"]["id"].as_str().unwrap()).unwrap(),
        email: data.email,
        username: data.username,
        token: json["data"]["token"].as_str().unwrap().to_string(),
    }
}

pub async fn setup_authenticated_user(app: &Router) -> TestUser {
    register_user(app, create_test_user_data()).await
}

/// JSON ボディ付きリクエスト（トークンがあれば Bearer を付与）
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::from_bytes(method.as_bytes()).unwrap())
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// ボディなしリクエスト
pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::from_bytes(method.as_bytes()).unwrap())
        .uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::empty()).unwrap()
}
