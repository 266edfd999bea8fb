// src/domain/task_model.rs

use super::productivity::completion_percentage;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub total_items: i32,
    pub completed_items: i32,
    /// completed_items / total_items から保存時に再計算
    pub completion_percentage: i32,
    pub is_completed: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub date: NaiveDate,
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
            completed_items: Set(0),
            completion_percentage: Set(0),
            is_completed: Set(false),
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

        // 派生フィールドは常にカウンタから再計算する
        if let (Some(completed), Some(total)) = (
            active_value(&self.completed_items),
            active_value(&self.total_items),
        ) {
            let percentage = completion_percentage(completed, total);
            self.completion_percentage = Set(percentage);
            self.is_completed = Set(percentage == 100);
        }

        Ok(self)
    }
}

fn active_value(value: &ActiveValue<i32>) -> Option<i32> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(*v),
        ActiveValue::NotSet => None,
    }
}
