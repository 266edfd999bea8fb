// src/service/day_lock.rs

use crate::error::{AppError, AppResult};
use crate::repository::day_record_repository::DayRecordRepository;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// 終了済みの日に対するタスク操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMutation {
    Create,
    Update,
    Delete,
}

impl TaskMutation {
    pub fn locked_message(&self) -> &'static str {
        match self {
            Self::Create => "Cannot add tasks to an ended day",
            Self::Update => "Cannot update tasks for an ended day",
            Self::Delete => "Cannot delete tasks from an ended day",
        }
    }
}

/// 終了済みの日のタスク変更を拒否するポリシー
pub struct DayLockPolicy {
    day_record_repo: Arc<DayRecordRepository>,
}

impl DayLockPolicy {
    pub fn new(day_record_repo: Arc<DayRecordRepository>) -> Self {
        Self { day_record_repo }
    }

    /// レコードが無ければ未終了
    pub async fn is_day_locked(&self, user_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        let record = self
            .day_record_repo
            .find_by_user_and_date(user_id, date)
            .await?;
        Ok(record.is_some_and(|r| r.is_ended))
    }

    pub async fn ensure_day_unlocked(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        mutation: TaskMutation,
    ) -> AppResult<()> {
        if self.is_day_locked(user_id, date).await? {
            warn!(
                user_id = %user_id,
                date = %date,
                action = ?mutation,
                "Rejected task mutation on ended day"
            );
            return Err(AppError::BadRequest(mutation.locked_message().to_string()));
        }
        Ok(())
    }
}
