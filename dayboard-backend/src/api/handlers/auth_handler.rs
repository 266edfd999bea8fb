// src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::{LoginRequest, RegisterRequest, UpdateVisibilityRequest};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use tracing::info;

/// ユーザー登録
pub async fn register_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    info!(username = %payload.username, "Registration attempt");

    let response = app_state.auth_service.register(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(response)))
}

/// ログイン
pub async fn login_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let response = app_state.auth_service.login(payload).await?;
    Ok(ApiResponse::success(response))
}

/// 現在のユーザー情報
pub async fn me_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let profile = app_state.auth_service.get_profile(user.user_id()).await?;
    Ok(ApiResponse::success(profile))
}

/// 公開スケジュールへの表示を切り替え
pub async fn update_visibility_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<UpdateVisibilityRequest>,
) -> AppResult<impl IntoResponse> {
    let profile = app_state
        .auth_service
        .update_visibility(user.user_id(), payload.profile_visible)
        .await?;
    Ok(ApiResponse::success(profile))
}

pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/me", get(me_handler))
        .route("/auth/me/visibility", patch(update_visibility_handler))
        .with_state(app_state)
}
