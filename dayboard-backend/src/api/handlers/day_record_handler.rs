// src/api/handlers/day_record_handler.rs
use crate::api::dto::day_record_dto::{CalendarQuery, EndDayDto};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::extractors::{ValidatedJson, ValidatedQuery, ValidatedUuid};
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;

/// 1日を終了して生産性スコアを確定
pub async fn end_day_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<EndDayDto>,
) -> AppResult<impl IntoResponse> {
    info!(
        user_id = %user.claims.user_id,
        date = %payload.date,
        "Ending day"
    );

    let record = app_state
        .day_record_service
        .end_day(user.user_id(), payload)
        .await?;

    Ok(ApiResponse::success(record))
}

pub async fn get_day_record_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(date): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = app_state
        .day_record_service
        .get_day_record(user.user_id(), &date)
        .await?;
    Ok(ApiResponse::success(record))
}

pub async fn get_calendar_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedQuery(query): ValidatedQuery<CalendarQuery>,
) -> AppResult<impl IntoResponse> {
    let records = app_state
        .day_record_service
        .get_calendar(user.user_id(), query)
        .await?;
    Ok(ApiResponse::success(records))
}

pub async fn get_public_calendar_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(user_id): ValidatedUuid,
    ValidatedQuery(query): ValidatedQuery<CalendarQuery>,
) -> AppResult<impl IntoResponse> {
    let calendar = app_state
        .day_record_service
        .get_public_calendar(user_id, query)
        .await?;
    Ok(ApiResponse::success(calendar))
}

pub async fn list_visible_users_handler(
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = app_state.day_record_service.list_visible_users().await?;
    Ok(ApiResponse::success(users))
}

async fn missing_date_handler() -> AppError {
    AppError::BadRequest("Date is required".to_string())
}

pub fn day_record_router(app_state: AppState) -> Router {
    Router::new()
        .route("/day-records/end-day", post(end_day_handler))
        .route("/day-records/day/{date}", get(get_day_record_handler))
        .route("/day-records/day", get(missing_date_handler))
        .route("/day-records/calendar", get(get_calendar_handler))
        .route(
            "/day-records/public/{user_id}/calendar",
            get(get_public_calendar_handler),
        )
        .route("/day-records/users", get(list_visible_users_handler))
        .with_state(app_state)
}
