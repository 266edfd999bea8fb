// src/api/dto/task_dto.rs
use super::common::double_option;
use crate::domain::task_model;
use crate::utils::validation::{self, task};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateTaskDto {
    #[validate(
        length(
            max = task::TITLE_MAX_LENGTH,
            message = "Task title must be between 1 and 200 characters"
        ),
        custom(function = validation::validate_task_title)
    )]
    pub title: String,

    #[validate(length(
        max = task::DESCRIPTION_MAX_LENGTH,
        message = "Task description must not exceed 2000 characters"
    ))]
    pub description: Option<String>,

    #[validate(range(
        min = task::MIN_TOTAL_ITEMS,
        max = task::MAX_ITEMS,
        message = "Total items must be at least 1"
    ))]
    pub total_items: i32,

    #[validate(length(
        max = task::NOTE_MAX_LENGTH,
        message = "Note must not exceed 2000 characters"
    ))]
    pub note: Option<String>,

    /// YYYY-MM-DD または RFC 3339
    #[validate(custom(function = validation::validate_not_blank))]
    pub date: String,
}

/// タスク項目の部分更新（指定されたフィールドのみ変更）
///
/// description と note は null を送るとクリアされる。
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
pub struct UpdateTaskDto {
    #[validate(
        length(
            max = task::TITLE_MAX_LENGTH,
            message = "Task title must be between 1 and 200 characters"
        ),
        custom(function = validation::validate_task_title)
    )]
    pub title: Option<String>,

    #[validate(length(
        max = task::DESCRIPTION_MAX_LENGTH,
        message = "Task description must not exceed 2000 characters"
    ))]
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[validate(range(
        min = task::MIN_TOTAL_ITEMS,
        max = task::MAX_ITEMS,
        message = "Total items must be at least 1"
    ))]
    pub total_items: Option<i32>,

    #[validate(range(
        min = 0,
        max = task::MAX_ITEMS,
        message = "Completed items cannot be negative"
    ))]
    pub completed_items: Option<i32>,

    #[validate(length(
        max = task::NOTE_MAX_LENGTH,
        message = "Note must not exceed 2000 characters"
    ))]
    #[serde(default, deserialize_with = "double_option")]
    pub note: Option<Option<String>>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdateProgressDto {
    #[validate(range(
        min = 0,
        max = task::MAX_ITEMS,
        message = "Completed items cannot be negative"
    ))]
    pub completed_items: i32,

    #[validate(length(
        max = task::NOTE_MAX_LENGTH,
        message = "Note must not exceed 2000 characters"
    ))]
    pub note: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct TaskListQuery {
    pub date: Option<String>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct TaskDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub total_items: i32,
    pub completed_items: i32,
    pub completion_percentage: i32,
    pub is_completed: bool,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<task_model::Model> for TaskDto {
    fn from(model: task_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            total_items: model.total_items,
            completed_items: model.completed_items,
            completion_percentage: model.completion_percentage,
            is_completed: model.is_completed,
            note: model.note,
            date: model.date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
