// src/service/day_record_service.rs

use crate::api::dto::day_record_dto::{
    CalendarQuery, DayRecordDto, EndDayDto, PublicCalendarDto, VisibleUserDto,
};
use crate::db::DbPool;
use crate::domain::day_record_model::ActiveModel as DayRecordActiveModel;
use crate::domain::productivity::ProductivityScore;
use crate::error::{AppError, AppResult};
use crate::repository::day_record_repository::DayRecordRepository;
use crate::repository::task_repository::TaskRepository;
use crate::repository::user_repository::UserRepository;
use crate::utils::date::{month_bounds, parse_day, resolve_month};
use crate::utils::validation::normalize_optional_text;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const DAY_RECORD_NOT_FOUND: &str = "Day record not found";

pub struct DayRecordService {
    repo: Arc<DayRecordRepository>,
    task_repo: Arc<TaskRepository>,
    user_repo: Arc<UserRepository>,
}

impl DayRecordService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(DayRecordRepository::new(db_pool.clone())),
            task_repo: Arc::new(TaskRepository::new(db_pool.clone())),
            user_repo: Arc::new(UserRepository::new(db_pool)),
        }
    }

    /// 1日を締めて生産性スコアを確定する
    ///
    /// 既に終了済みの日は条件付き UPSERT が何も書かないため、
    /// 同時実行されても書き込むのは1件だけになる。
    pub async fn end_day(&self, user_id: Uuid, payload: EndDayDto) -> AppResult<DayRecordDto> {
        let date = parse_day(&payload.date)?;

        let tasks = self.task_repo.find_by_user_and_date(user_id, date).await?;
        let score =
            ProductivityScore::from_task_percentages(tasks.iter().map(|t| t.completion_percentage));

        let record = DayRecordActiveModel::ended(
            user_id,
            date,
            score,
            normalize_optional_text(payload.summary),
        );

        if !self.repo.upsert_if_not_ended(record).await? {
            warn!(user_id = %user_id, date = %date, "Day has already been ended");
            return Err(AppError::BadRequest("Day has already been ended".to_string()));
        }

        let record = self
            .repo
            .find_by_user_and_date(user_id, date)
            .await?
            .ok_or_else(|| {
                AppError::InternalServerError(format!(
                    "Day record for {} disappeared after end-day",
                    date
                ))
            })?;

        info!(
            user_id = %user_id,
            date = %date,
            total_tasks = score.total_tasks,
            completed_tasks = score.completed_tasks,
            overall_productivity = score.overall_productivity,
            productivity_label = %score.label,
            "Day ended"
        );

        Ok(record.into())
    }

    pub async fn get_day_record(&self, user_id: Uuid, date: &str) -> AppResult<DayRecordDto> {
        let date = parse_day(date)?;

        self.repo
            .find_by_user_and_date(user_id, date)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(DAY_RECORD_NOT_FOUND.to_string()))
    }

    /// 指定月の終了済みレコード（日付の昇順）
    pub async fn get_calendar(
        &self,
        user_id: Uuid,
        query: CalendarQuery,
    ) -> AppResult<Vec<DayRecordDto>> {
        let (year, month) = resolve_month(query.month, query.year);
        let (start, end) = month_bounds(year, month)?;

        let records = self.repo.find_ended_in_range(user_id, start, end).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// 公開プロフィールのユーザーのカレンダー
    pub async fn get_public_calendar(
        &self,
        target_user_id: Uuid,
        query: CalendarQuery,
    ) -> AppResult<PublicCalendarDto> {
        let user = self
            .user_repo
            .find_visible_by_id(target_user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("User not found or profile not visible".to_string())
            })?;

        let day_records = self.get_calendar(user.id, query).await?;

        Ok(PublicCalendarDto {
            user: user.into(),
            day_records,
        })
    }

    /// 公開スケジュールに表示するユーザー一覧
    pub async fn list_visible_users(&self) -> AppResult<Vec<VisibleUserDto>> {
        let users = self.user_repo.find_visible().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
