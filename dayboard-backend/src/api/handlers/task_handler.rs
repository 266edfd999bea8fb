// src/api/handlers/task_handler.rs
use crate::api::dto::task_dto::{CreateTaskDto, TaskListQuery, UpdateProgressDto, UpdateTaskDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedQuery, ValidatedUuid};
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Router,
};
use tracing::info;

pub async fn create_task_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateTaskDto>,
) -> AppResult<impl IntoResponse> {
    info!(
        user_id = %user.claims.user_id,
        task_title = %payload.title,
        date = %payload.date,
        "Creating new task"
    );

    let task_dto = app_state
        .task_service
        .create_task_for_user(user.user_id(), payload)
        .await?;

    info!(
        user_id = %user.claims.user_id,
        task_id = %task_dto.id,
        "Task created successfully"
    );

    Ok((StatusCode::CREATED, ApiResponse::success(task_dto)))
}

pub async fn list_tasks_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedQuery(query): ValidatedQuery<TaskListQuery>,
) -> AppResult<impl IntoResponse> {
    let tasks = app_state
        .task_service
        .list_tasks_for_user(user.user_id(), query.date.as_deref())
        .await?;
    Ok(ApiResponse::success(tasks))
}

pub async fn list_public_tasks_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(user_id): ValidatedUuid,
    ValidatedQuery(query): ValidatedQuery<TaskListQuery>,
) -> AppResult<impl IntoResponse> {
    let tasks = app_state
        .task_service
        .list_public_tasks(user_id, query.date.as_deref())
        .await?;
    Ok(ApiResponse::success(tasks))
}

pub async fn get_task_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let task = app_state
        .task_service
        .get_task_for_user(user.user_id(), id)
        .await?;
    Ok(ApiResponse::success(task))
}

pub async fn update_task_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateTaskDto>,
) -> AppResult<impl IntoResponse> {
    let task = app_state
        .task_service
        .update_task_for_user(user.user_id(), id, payload)
        .await?;
    Ok(ApiResponse::success(task))
}

pub async fn update_progress_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateProgressDto>,
) -> AppResult<impl IntoResponse> {
    let task = app_state
        .task_service
        .update_progress_for_user(user.user_id(), id, payload)
        .await?;
    Ok(ApiResponse::success(task))
}

pub async fn delete_task_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    app_state
        .task_service
        .delete_task_for_user(user.user_id(), id)
        .await?;

    info!(user_id = %user.claims.user_id, task_id = %id, "Task deleted");

    Ok(ApiResponse::empty())
}

pub fn task_router(app_state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route("/tasks/public/{user_id}", get(list_public_tasks_handler))
        .route(
            "/tasks/{id}",
            get(get_task_handler)
                .put(update_task_handler)
                .delete(delete_task_handler),
        )
        .route("/tasks/{id}/progress", put(update_progress_handler))
        .with_state(app_state)
}
