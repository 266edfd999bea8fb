// src/middleware/auth.rs

use crate::config::AppConfig;
use crate::domain::user_model::UserClaims;
use crate::error::AppError;
use crate::utils::jwt::{JwtError, JwtManager};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, Method},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::warn;
use uuid::Uuid;

/// JWT マネージャーを提供するトレイト
pub trait HasJwtManager {
    fn jwt_manager(&self) -> &Arc<JwtManager>;
}

/// 認証済みユーザー情報
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: UserClaims,
}

impl AuthenticatedUser {
    pub fn new(claims: UserClaims) -> Self {
        Self { claims }
    }

    pub fn user_id(&self) -> Uuid {
        self.claims.user_id
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: HasJwtManager + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts).ok_or_else(|| {
            warn!(path = %parts.uri.path(), "Authentication attempt without token");
            AppError::Unauthorized("Missing authentication token".to_string())
        })?;

        let access_claims = state
            .jwt_manager()
            .verify_access_token(token)
            .map_err(|e| {
                warn!(error = %e, "JWT verification failed");
                match e {
                    JwtError::TokenExpired => {
                        AppError::Unauthorized("Access token has expired".to_string())
                    }
                    _ => AppError::Unauthorized("Invalid access token".to_string()),
                }
            })?;

        Ok(AuthenticatedUser::new(access_claims.user))
    }
}

/// Authorization: Bearer <token> からトークンを取り出す
fn extract_bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// 設定された許可オリジンで CORS レイヤーを構築
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)) // プリフライトのキャッシュ時間
}
