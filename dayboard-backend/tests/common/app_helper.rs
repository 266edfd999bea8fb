// tests/common/app_helper.rs

use axum::{
    body::{self, Body},
    http::{Response, StatusCode},
    Router,
};
use dayboard_backend::{
    app_router,
    config::AppConfig,
    db::{self, DbPool},
    AppState,
};
use serde_json::Value;

use crate::common;

/// インメモリ SQLite にマイグレーションを適用したアプリを作成
pub async fn setup_app() -> (Router, DbPool) {
    common::init_test_env();

    let config = AppConfig::for_testing();
    let pool = db::create_db_pool(&config)
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState::new(pool.clone(), config).expect("Failed to build app state");
    (app_router(state), pool)
}

/// レスポンスのステータスと JSON ボディを取り出す
pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
