// src/service/auth_service.rs
use crate::api::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::domain::user_model::{self, SafeUser};
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::{NewUser, UserRepository};
use crate::utils::jwt::JwtManager;
use crate::utils::password::{PasswordError, PasswordManager};
use sea_orm::SqlErr;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// 認証サービス
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
    ) -> Self {
        Self {
            user_repo,
            password_manager,
            jwt_manager,
        }
    }

    /// ユーザー登録
    pub async fn register(&self, payload: RegisterRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&payload.email);
        let username = payload.username.trim().to_string();

        // メールアドレスとユーザー名の重複チェック
        if let Some(existing) = self
            .user_repo
            .find_by_email_or_username(&email, &username)
            .await?
        {
            let message = if existing.email == email {
                "Email address is already registered"
            } else {
                "Username is already taken"
            };
            return Err(AppError::Conflict(message.to_string()));
        }

        let password_hash = self
            .password_manager
            .hash_password(&payload.password)
            .map_err(|e| match e {
                PasswordError::WeakPassword(message) => AppError::ValidationError(message),
                other => AppError::InternalServerError(format!("Password hashing failed: {}", other)),
            })?;

        let user = self
            .user_repo
            .create(NewUser {
                email,
                username,
                password_hash,
            })
            .await
            .map_err(|e| match e.sql_err() {
                // 同時登録で一意制約に当たった場合
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("Email or username is already registered".to_string())
                }
                _ => AppError::DbErr(e),
            })?;

        info!(
            user_id = %user.id,
            username = %user.username,
            "User registered successfully"
        );

        self.issue_token(user)
    }

    /// ログイン
    pub async fn login(&self, payload: LoginRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&payload.email);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "Login attempt with invalid credentials");
                AppError::Unauthorized("Invalid credentials".to_string())
            })?;

        let is_valid = self
            .password_manager
            .verify_password(&payload.password, &user.password_hash)
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Password verification failed");
                AppError::InternalServerError("Authentication failed".to_string())
            })?;

        if !is_valid {
            warn!(user_id = %user.id, "Login attempt with incorrect password");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        info!(user_id = %user.id, "User logged in");

        self.issue_token(user)
    }

    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<SafeUser> {
        self.find_user(user_id).await.map(Into::into)
    }

    /// 公開スケジュールへの表示を切り替える
    pub async fn update_visibility(
        &self,
        user_id: Uuid,
        profile_visible: bool,
    ) -> AppResult<SafeUser> {
        let user = self.find_user(user_id).await?;
        let updated = self
            .user_repo
            .update_profile_visibility(user, profile_visible)
            .await?;

        info!(user_id = %user_id, profile_visible, "Profile visibility updated");

        Ok(updated.into())
    }

    async fn find_user(&self, user_id: Uuid) -> AppResult<user_model::Model> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn issue_token(&self, user: user_model::Model) -> AppResult<AuthResponse> {
        let token = self
            .jwt_manager
            .generate_access_token(user.to_claims())
            .map_err(|e| AppError::InternalServerError(format!("Token generation failed: {}", e)))?;

        Ok(AuthResponse {
            token,
            expires_in: self.jwt_manager.access_token_expires_in(),
            user: user.into(),
        })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
