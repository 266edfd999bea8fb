// src/service/task_service.rs

use crate::api::dto::task_dto::{CreateTaskDto, TaskDto, UpdateProgressDto, UpdateTaskDto};
use crate::db::DbPool;
use crate::domain::task_model;
use crate::error::{AppError, AppResult};
use crate::repository::day_record_repository::DayRecordRepository;
use crate::repository::task_repository::{NewTask, TaskChanges, TaskRepository};
use crate::repository::user_repository::UserRepository;
use crate::service::day_lock::{DayLockPolicy, TaskMutation};
use crate::utils::date::parse_day;
use crate::utils::validation::normalize_optional_text;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const TASK_NOT_FOUND: &str = "Task not found";
const COMPLETED_EXCEEDS_TOTAL: &str = "Completed items cannot exceed total items";

pub struct TaskService {
    repo: Arc<TaskRepository>,
    user_repo: Arc<UserRepository>,
    day_lock: DayLockPolicy,
}

impl TaskService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(TaskRepository::new(db_pool.clone())),
            user_repo: Arc::new(UserRepository::new(db_pool.clone())),
            day_lock: DayLockPolicy::new(Arc::new(DayRecordRepository::new(db_pool))),
        }
    }

    // --- CRUD ---

    pub async fn create_task_for_user(
        &self,
        user_id: Uuid,
        payload: CreateTaskDto,
    ) -> AppResult<TaskDto> {
        let date = parse_day(&payload.date)?;

        self.day_lock
            .ensure_day_unlocked(user_id, date, TaskMutation::Create)
            .await?;

        let new_task = NewTask {
            title: payload.title.trim().to_string(),
            description: normalize_optional_text(payload.description),
            total_items: payload.total_items,
            note: normalize_optional_text(payload.note),
            date,
        };

        let created = self.repo.create_for_user(user_id, new_task).await?;
        Ok(created.into())
    }

    pub async fn get_task_for_user(&self, user_id: Uuid, id: Uuid) -> AppResult<TaskDto> {
        Ok(self.find_owned(user_id, id).await?.into())
    }

    /// 日付が無ければ全件
    pub async fn list_tasks_for_user(
        &self,
        user_id: Uuid,
        date: Option<&str>,
    ) -> AppResult<Vec<TaskDto>> {
        let date = parse_optional_day(date)?;
        let tasks = self.repo.find_for_user(user_id, date).await?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }

    /// 公開プロフィールのユーザーのタスク一覧
    pub async fn list_public_tasks(
        &self,
        target_user_id: Uuid,
        date: Option<&str>,
    ) -> AppResult<Vec<TaskDto>> {
        self.user_repo
            .find_visible_by_id(target_user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("User not found or profile not visible".to_string())
            })?;

        self.list_tasks_for_user(target_user_id, date).await
    }

    pub async fn update_task_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateTaskDto,
    ) -> AppResult<TaskDto> {
        let task = self.find_owned(user_id, id).await?;

        self.day_lock
            .ensure_day_unlocked(user_id, task.date, TaskMutation::Update)
            .await?;

        let changes = resolve_task_changes(&task, payload)?;
        let updated = self.repo.update(task, changes).await?;

        info!(
            user_id = %user_id,
            task_id = %updated.id,
            completion_percentage = updated.completion_percentage,
            "Task updated"
        );

        Ok(updated.into())
    }

    pub async fn update_progress_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateProgressDto,
    ) -> AppResult<TaskDto> {
        let task = self.find_owned(user_id, id).await?;

        self.day_lock
            .ensure_day_unlocked(user_id, task.date, TaskMutation::Update)
            .await?;

        if payload.completed_items > task.total_items {
            return Err(AppError::ValidationError(
                COMPLETED_EXCEEDS_TOTAL.to_string(),
            ));
        }

        let changes = TaskChanges {
            completed_items: Some(payload.completed_items),
            note: payload.note.map(|note| normalize_optional_text(Some(note))),
            ..Default::default()
        };
        let updated = self.repo.update(task, changes).await?;

        info!(
            user_id = %user_id,
            task_id = %updated.id,
            completed_items = updated.completed_items,
            total_items = updated.total_items,
            "Task progress updated"
        );

        Ok(updated.into())
    }

    pub async fn delete_task_for_user(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        let task = self.find_owned(user_id, id).await?;

        self.day_lock
            .ensure_day_unlocked(user_id, task.date, TaskMutation::Delete)
            .await?;

        let result = self.repo.delete_for_user(user_id, id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(TASK_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    /// 他人のタスクも存在しないものとして扱う
    async fn find_owned(&self, user_id: Uuid, id: Uuid) -> AppResult<task_model::Model> {
        self.repo
            .find_by_id_for_user(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND.to_string()))
    }
}

fn parse_optional_day(date: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => parse_day(date).map(Some),
        None => Ok(None),
    }
}

/// 部分更新を既存タスクに当てはめる
///
/// total_items が completed_items を下回る場合は completed_items を切り詰める。
/// 明示的に指定された completed_items が上限を超える場合はエラー。
fn resolve_task_changes(
    task: &task_model::Model,
    payload: UpdateTaskDto,
) -> AppResult<TaskChanges> {
    let total_items = payload.total_items.unwrap_or(task.total_items);

    let completed_items = match payload.completed_items {
        Some(completed) if completed > total_items => {
            return Err(AppError::ValidationError(
                COMPLETED_EXCEEDS_TOTAL.to_string(),
            ));
        }
        Some(completed) => Some(completed),
        None if task.completed_items > total_items => Some(total_items),
        None => None,
    };

    Ok(TaskChanges {
        title: payload.title.map(|title| title.trim().to_string()),
        description: payload.description.map(normalize_optional_text),
        total_items: payload.total_items,
        completed_items,
        note: payload.note.map(normalize_optional_text),
    })
}
