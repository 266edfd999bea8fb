// src/repository/day_record_repository.rs
use crate::domain::day_record_model::{
    self, ActiveModel as DayRecordActiveModel, Entity as DayRecordEntity,
};
use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{entity::*, query::*, DbConn, DbErr};
use uuid::Uuid;

pub struct DayRecordRepository {
    db: DbConn,
}

impl DayRecordRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_user_and_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<day_record_model::Model>, DbErr> {
        DayRecordEntity::find()
            .filter(day_record_model::Column::UserId.eq(user_id))
            .filter(day_record_model::Column::Date.eq(date))
            .one(&self.db)
            .await
    }

    /// 期間内（両端含む）の終了済みレコードを日付の昇順で取得
    pub async fn find_ended_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<day_record_model::Model>, DbErr> {
        DayRecordEntity::find()
            .filter(day_record_model::Column::UserId.eq(user_id))
            .filter(day_record_model::Column::IsEnded.eq(true))
            .filter(day_record_model::Column::Date.between(start, end))
            .order_by_asc(day_record_model::Column::Date)
            .all(&self.db)
            .await
    }

    /// 未終了の場合のみ書き込む条件付き UPSERT
    ///
    /// `INSERT .. ON CONFLICT (user_id, date) DO UPDATE .. WHERE is_ended = false`
    /// を1文で実行する。既に終了済みなら書き込まれず `false` を返す。
    pub async fn upsert_if_not_ended(&self, record: DayRecordActiveModel) -> Result<bool, DbErr> {
        let on_conflict = OnConflict::columns([
            day_record_model::Column::UserId,
            day_record_model::Column::Date,
        ])
        .update_columns([
            day_record_model::Column::IsEnded,
            day_record_model::Column::EndedAt,
            day_record_model::Column::TotalTasks,
            day_record_model::Column::CompletedTasks,
            day_record_model::Column::OverallProductivity,
            day_record_model::Column::ProductivityLabel,
            day_record_model::Column::Summary,
            day_record_model::Column::UpdatedAt,
        ])
        .action_and_where(
            Expr::col((DayRecordEntity, day_record_model::Column::IsEnded)).eq(false),
        )
        .to_owned();

        let rows_affected = DayRecordEntity::insert(record)
            .on_conflict(on_conflict)
            .exec_without_returning(&self.db)
            .await?;

        Ok(rows_affected > 0)
    }
}
