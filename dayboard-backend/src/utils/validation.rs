// src/utils/validation.rs

//! DTO間で共有するバリデーション定数とカスタムバリデータ

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// ユーザー名の制約
pub mod username {
    pub const MIN_LENGTH: u64 = 3;
    pub const MAX_LENGTH: u64 = 30;
}

/// パスワードの制約
pub mod password {
    pub const MIN_LENGTH: u64 = 8;
    pub const MAX_LENGTH: u64 = 128;
}

/// タスク関連の制約
pub mod task {
    pub const TITLE_MAX_LENGTH: u64 = 200;
    pub const DESCRIPTION_MAX_LENGTH: u64 = 2000;
    pub const NOTE_MAX_LENGTH: u64 = 2000;
    pub const MIN_TOTAL_ITEMS: i32 = 1;
    pub const MAX_ITEMS: i32 = 100_000;
}

/// 日次記録の制約
pub mod day_record {
    pub const SUMMARY_MAX_LENGTH: u64 = 2000;
}

pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid username regex"));

/// ユーザー名の形式をバリデーション
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !USERNAME_REGEX.is_match(username) {
        let mut error = ValidationError::new("invalid_username_format");
        error.message = Some(
            "Username may only contain letters, numbers, underscores and hyphens".into(),
        );
        return Err(error);
    }
    Ok(())
}

/// パスワードの強度をバリデーション（長さは length で別途チェック）
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_lowercase || !has_uppercase || !has_digit {
        let mut error = ValidationError::new("weak_password");
        error.message = Some(
            "Password must contain at least one lowercase letter, one uppercase letter, and one digit"
                .into(),
        );
        return Err(error);
    }

    Ok(())
}

/// 空白のみの文字列を拒否
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Field cannot be empty or contain only whitespace".into());
        return Err(error);
    }
    Ok(())
}

/// タスクタイトルのバリデーション
pub fn validate_task_title(title: &str) -> Result<(), ValidationError> {
    validate_not_blank(title)?;

    if title.contains('\0') || title.contains('\r') || title.contains('\n') {
        let mut error = ValidationError::new("invalid_characters");
        error.message =
            Some("Title cannot contain null, carriage return, or newline characters".into());
        return Err(error);
    }

    Ok(())
}

/// 前後の空白を取り除き、空になったら None
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
