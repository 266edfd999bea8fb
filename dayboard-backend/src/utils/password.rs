// src/utils/password.rs

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::env;
use thiserror::Error;

/// パスワード関連のエラー
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingError(#[from] argon2::password_hash::Error),

    #[error("Argon2 parameter error: {0}")]
    Argon2Error(#[from] argon2::Error),

    #[error("Weak password: {0}")]
    WeakPassword(String),

    #[error("Password configuration error: {0}")]
    ConfigurationError(String),
}

/// パスワード強度要件
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// 最小文字数
    pub min_length: usize,
    /// 最大文字数
    pub max_length: usize,
    /// 大文字が必要
    pub require_uppercase: bool,
    /// 小文字が必要
    pub require_lowercase: bool,
    /// 数字が必要
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
        }
    }
}

impl PasswordPolicy {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            min_length: env_or("PASSWORD_MIN_LENGTH", defaults.min_length),
            max_length: env_or("PASSWORD_MAX_LENGTH", defaults.max_length),
            require_uppercase: env_or("PASSWORD_REQUIRE_UPPERCASE", defaults.require_uppercase),
            require_lowercase: env_or("PASSWORD_REQUIRE_LOWERCASE", defaults.require_lowercase),
            require_digit: env_or("PASSWORD_REQUIRE_DIGIT", defaults.require_digit),
        }
    }

    /// パスワードポリシーを検証
    pub fn validate(&self) -> Result<(), PasswordError> {
        if self.min_length < 4 {
            return Err(PasswordError::ConfigurationError(
                "Minimum password length must be at least 4".to_string(),
            ));
        }

        if self.max_length < self.min_length {
            return Err(PasswordError::ConfigurationError(
                "Maximum password length must be greater than minimum".to_string(),
            ));
        }

        Ok(())
    }
}

/// Argon2 設定
#[derive(Debug, Clone)]
pub struct Argon2Config {
    /// メモリコスト（KB）
    pub memory_cost: u32,
    /// 時間コスト（反復回数）
    pub time_cost: u32,
    /// 並列度
    pub parallelism: u32,
    /// 出力長
    pub output_length: usize,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 65536, // 64MB
            time_cost: 3,
            parallelism: 4,
            output_length: 32,
        }
    }
}

impl Argon2Config {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            memory_cost: env_or("ARGON2_MEMORY_COST", defaults.memory_cost),
            time_cost: env_or("ARGON2_TIME_COST", defaults.time_cost),
            parallelism: env_or("ARGON2_PARALLELISM", defaults.parallelism),
            output_length: env_or("ARGON2_OUTPUT_LENGTH", defaults.output_length),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// パスワードハッシュマネージャー
pub struct PasswordManager {
    argon2: Argon2<'static>,
    policy: PasswordPolicy,
}

impl PasswordManager {
    /// 新しいPasswordManagerを作成
    pub fn new(argon2_config: Argon2Config, policy: PasswordPolicy) -> Result<Self, PasswordError> {
        policy.validate()?;

        let argon2 = Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            argon2::Params::new(
                argon2_config.memory_cost,
                argon2_config.time_cost,
                argon2_config.parallelism,
                Some(argon2_config.output_length),
            )
            .map_err(PasswordError::Argon2Error)?,
        );

        Ok(Self { argon2, policy })
    }

    /// パスワードをハッシュ化
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.validate_password_strength(password)?;

        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(PasswordError::HashingError)?;

        Ok(password_hash.to_string())
    }

    /// パスワードを検証
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(PasswordError::HashingError)?;

        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::HashingError(e)),
        }
    }

    /// パスワード強度をチェック
    pub fn validate_password_strength(&self, password: &str) -> Result<(), PasswordError> {
        let mut errors = Vec::new();
        let length = password.chars().count();

        if length < self.policy.min_length {
            errors.push(format!(
                "Password must be at least {} characters long",
                self.policy.min_length
            ));
        }

        if length > self.policy.max_length {
            errors.push(format!(
                "Password must be no more than {} characters long",
                self.policy.max_length
            ));
        }

        if self.policy.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
            errors.push("Password must contain at least one uppercase letter".to_string());
        }

        if self.policy.require_lowercase && !password.chars().any(|c| c.is_lowercase()) {
            errors.push("Password must contain at least one lowercase letter".to_string());
        }

        if self.policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push("Password must contain at least one digit".to_string());
        }

        if !errors.is_empty() {
            return Err(PasswordError::WeakPassword(errors.join("; ")));
        }

        Ok(())
    }
}
