// src/api/dto/auth_dto.rs

use crate::domain::user_model::SafeUser;
use crate::utils::validation::{self, password, username};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- リクエストDTO ---

/// ユーザー登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(
            min = username::MIN_LENGTH,
            max = username::MAX_LENGTH,
            message = "Username must be between 3 and 30 characters"
        ),
        custom(function = validation::validate_username)
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(
            min = password::MIN_LENGTH,
            max = password::MAX_LENGTH,
            message = "Password must be between 8 and 128 characters"
        ),
        custom(function = validation::validate_password_strength)
    )]
    pub password: String,
}

/// ログインリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 公開スケジュールへの表示切り替え
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateVisibilityRequest {
    pub profile_visible: bool,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    /// トークンの有効期限（秒）
    pub expires_in: i64,
    pub user: SafeUser,
}
