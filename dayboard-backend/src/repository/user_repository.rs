// src/repository/user_repository.rs

use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use sea_orm::entity::*;
use sea_orm::{Condition, QueryFilter, QueryOrder};
use sea_orm::{DbConn, DbErr, Set};
use uuid::Uuid;

/// 新規ユーザーの入力値（パスワードはハッシュ済み）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug)]
pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// ユーザーをIDで検索
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find_by_id(id).one(&self.db).await
    }

    /// ユーザーをメールアドレスで検索
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(user_model::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// メールアドレスまたはユーザー名の重複を確認
    pub async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(
                Condition::any()
                    .add(user_model::Column::Email.eq(email))
                    .add(user_model::Column::Username.eq(username)),
            )
            .one(&self.db)
            .await
    }

    /// 公開中のユーザーをIDで取得
    pub async fn find_visible_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find_by_id(id)
            .filter(user_model::Column::ProfileVisible.eq(true))
            .one(&self.db)
            .await
    }

    /// 公開中のユーザー一覧（ユーザー名の昇順）
    pub async fn find_visible(&self) -> Result<Vec<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(user_model::Column::ProfileVisible.eq(true))
            .order_by_asc(user_model::Column::Username)
            .all(&self.db)
            .await
    }

    pub async fn create(&self, payload: NewUser) -> Result<user_model::Model, DbErr> {
        let new_user = UserActiveModel {
            email: Set(payload.email),
            username: Set(payload.username),
            password_hash: Set(payload.password_hash),
            ..Default::default()
        };
        new_user.insert(&self.db).await
    }

    pub async fn update_profile_visibility(
        &self,
        user: user_model::Model,
        profile_visible: bool,
    ) -> Result<user_model::Model, DbErr> {
        let mut active_model: UserActiveModel = user.into();
        active_model.profile_visible = Set(profile_visible);
        active_model.update(&self.db).await
    }
}
