use crate::utils::jwt::JwtConfig;
use crate::utils::password::{Argon2Config, PasswordPolicy};
use std::env;

#[derive(Clone, Debug)]
pub struct PasswordConfig {
    pub argon2: Argon2Config,
    pub policy: PasswordPolicy,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub database_url: String,
    pub run_migrations: bool,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        // .env ファイルを読み込む (存在しなくてもエラーにしない)
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            jwt: JwtConfig::from_env().map_err(|e| e.to_string())?,
            password: PasswordConfig {
                argon2: Argon2Config::from_env(),
                policy: PasswordPolicy::from_env(),
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            database_url: "sqlite::memory:".to_string(),
            run_migrations: true,
            jwt: JwtConfig {
                secret_key: "test-secret-key-that-is-at-least-32-characters-long".to_string(),
                ..JwtConfig::default()
            },
            password: PasswordConfig {
                // テストを高速化するため最小コスト
                argon2: Argon2Config {
                    memory_cost: 8,
                    time_cost: 1,
                    parallelism: 1,
                    output_length: 32,
                },
                policy: PasswordPolicy::default(),
            },
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
