// src/domain/day_record_model.rs

use super::productivity::{ProductivityLabel, ProductivityScore};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// ユーザー×日付ごとの集計と終了フラグ
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "day_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    /// 一度 true になったら戻らない
    pub is_ended: bool,
    #[sea_orm(nullable)]
    pub ended_at: Option<DateTime<Utc>>,
    pub total_tasks: i32,
    pub completed_tasks: i32,
    pub overall_productivity: i32,
    pub productivity_label: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::user_model::Entity",
        from = "Column::UserId",
        to = "crate::domain::user_model::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<crate::domain::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            is_ended: Set(false),
            total_tasks: Set(0),
            completed_tasks: Set(0),
            overall_productivity: Set(0),
            productivity_label: Set(ProductivityLabel::NotProductive.as_str().to_string()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl ActiveModel {
    /// end-day 用の確定済みレコードを組み立てる
    pub fn ended(
        user_id: Uuid,
        date: NaiveDate,
        score: ProductivityScore,
        summary: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: Set(user_id),
            date: Set(date),
            is_ended: Set(true),
            ended_at: Set(Some(now)),
            total_tasks: Set(score.total_tasks),
            completed_tasks: Set(score.completed_tasks),
            overall_productivity: Set(score.overall_productivity),
            productivity_label: Set(score.label.as_str().to_string()),
            summary: Set(summary),
            updated_at: Set(now),
            ..<Self as ActiveModelBehavior>::new()
        }
    }
}

impl Model {
    pub fn label(&self) -> ProductivityLabel {
        ProductivityLabel::from_str(&self.productivity_label).unwrap_or_default()
    }
}
