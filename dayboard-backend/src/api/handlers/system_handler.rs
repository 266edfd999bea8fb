// src/api/handlers/system_handler.rs
use crate::api::AppState;
use crate::types::ApiResponse;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthCheckResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// 死活監視（DB に ping できなければ 503）
pub async fn health_check_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    let database_healthy = match app_state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "Database health check failed");
            false
        }
    };

    let response = HealthCheckResponse {
        status: if database_healthy { "healthy" } else { "degraded" }.to_string(),
        database: if database_healthy { "up" } else { "down" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let status = if database_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ApiResponse::success(response)))
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
