// src/api/dto/day_record_dto.rs
use super::common::empty_string_as_none;
use crate::domain::day_record_model;
use crate::domain::productivity::ProductivityLabel;
use crate::domain::user_model;
use crate::utils::validation::{self, day_record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct EndDayDto {
    /// YYYY-MM-DD または RFC 3339
    #[validate(custom(function = validation::validate_not_blank))]
    pub date: String,

    #[validate(length(
        max = day_record::SUMMARY_MAX_LENGTH,
        message = "Summary must not exceed 2000 characters"
    ))]
    pub summary: Option<String>,
}

/// month と year は両方指定された場合のみ有効（空文字は未指定）
#[derive(Deserialize, Debug, Default)]
pub struct CalendarQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub month: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub year: Option<i32>,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug)]
pub struct DayRecordDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub is_ended: bool,
    pub ended_at: Option<DateTime<Utc>>,
    pub total_tasks: i32,
    pub completed_tasks: i32,
    pub overall_productivity: i32,
    pub productivity_label: ProductivityLabel,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<day_record_model::Model> for DayRecordDto {
    fn from(model: day_record_model::Model) -> Self {
        Self {
            productivity_label: model.label(),
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            is_ended: model.is_ended,
            ended_at: model.ended_at,
            total_tasks: model.total_tasks,
            completed_tasks: model.completed_tasks,
            overall_productivity: model.overall_productivity,
            summary: model.summary,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// 公開カレンダーに添えるユーザー情報
#[derive(Serialize, Deserialize, Debug)]
pub struct PublicProfileDto {
    pub id: Uuid,
    pub username: String,
    pub profile_visible: bool,
}

impl From<user_model::Model> for PublicProfileDto {
    fn from(user: user_model::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            profile_visible: user.profile_visible,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PublicCalendarDto {
    pub user: PublicProfileDto,
    pub day_records: Vec<DayRecordDto>,
}

/// 公開スケジュールのユーザー一覧の要素
#[derive(Serialize, Deserialize, Debug)]
pub struct VisibleUserDto {
    pub id: Uuid,
    pub username: String,
}

impl From<user_model::Model> for VisibleUserDto {
    fn from(user: user_model::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
