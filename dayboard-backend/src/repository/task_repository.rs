// src/repository/task_repository.rs
use crate::domain::task_model::{self, ActiveModel as TaskActiveModel, Entity as TaskEntity};
use chrono::NaiveDate;
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

/// 新規タスクの入力値（検証済み）
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub total_items: i32,
    pub note: Option<String>,
    pub date: NaiveDate,
}

/// 既存タスクへの変更（None は変更なし）
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub total_items: Option<i32>,
    pub completed_items: Option<i32>,
    pub note: Option<Option<String>>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.total_items.is_none()
            && self.completed_items.is_none()
            && self.note.is_none()
    }
}

pub struct TaskRepository {
    db: DbConn,
}

impl TaskRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<task_model::Model>, DbErr> {
        TaskEntity::find_by_id(id)
            .filter(task_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// ユーザーのタスク一覧（作成日の降順、日付で絞り込み可）
    pub async fn find_for_user(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<Vec<task_model::Model>, DbErr> {
        let mut query = TaskEntity::find().filter(task_model::Column::UserId.eq(user_id));

        if let Some(date) = date {
            query = query.filter(task_model::Column::Date.eq(date));
        }

        query
            .order_by_desc(task_model::Column::CreatedAt)
            .order_by_desc(task_model::Column::Id)
            .all(&self.db)
            .await
    }

    /// end-day 集計用：指定日のタスクをすべて取得
    pub async fn find_by_user_and_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<task_model::Model>, DbErr> {
        TaskEntity::find()
            .filter(task_model::Column::UserId.eq(user_id))
            .filter(task_model::Column::Date.eq(date))
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: NewTask,
    ) -> Result<task_model::Model, DbErr> {
        let new_task = TaskActiveModel {
            user_id: Set(user_id),
            title: Set(payload.title),
            description: Set(payload.description),
            total_items: Set(payload.total_items),
            completed_items: Set(0),
            note: Set(payload.note),
            date: Set(payload.date),
            ..Default::default()
        };
        new_task.insert(&self.db).await
    }

    /// 変更を適用して保存（進捗率は before_save で再計算される）
    pub async fn update(
        &self,
        task: task_model::Model,
        changes: TaskChanges,
    ) -> Result<task_model::Model, DbErr> {
        if changes.is_empty() {
            return Ok(task);
        }

        let mut active_model: TaskActiveModel = task.into();

        if let Some(title) = changes.title {
            active_model.title = Set(title);
        }
        if let Some(description) = changes.description {
            active_model.description = Set(description);
        }
        if let Some(total_items) = changes.total_items {
            active_model.total_items = Set(total_items);
        }
        if let Some(completed_items) = changes.completed_items {
            active_model.completed_items = Set(completed_items);
        }
        if let Some(note) = changes.note {
            active_model.note = Set(note);
        }

        active_model.update(&self.db).await
    }

    pub async fn delete_for_user(&self, user_id: Uuid, id: Uuid) -> Result<DeleteResult, DbErr> {
        TaskEntity::delete_many()
            .filter(task_model::Column::Id.eq(id))
            .filter(task_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
