// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{cors_layer, HasJwtManager};
use crate::repository::user_repository::UserRepository;
use crate::service::{
    auth_service::AuthService, day_record_service::DayRecordService, task_service::TaskService,
};
use crate::utils::jwt::JwtManager;
use crate::utils::password::PasswordManager;
use axum::{middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub task_service: Arc<TaskService>,
    pub day_record_service: Arc<DayRecordService>,
    pub jwt_manager: Arc<JwtManager>,
    pub db: DbPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// 接続プールと設定から各サービスを組み立てる
    pub fn new(db: DbPool, config: AppConfig) -> Result<Self, String> {
        let jwt_manager = Arc::new(
            JwtManager::new(config.jwt.clone())
                .map_err(|e| format!("Invalid JWT configuration: {}", e))?,
        );
        let password_manager = Arc::new(
            PasswordManager::new(
                config.password.argon2.clone(),
                config.password.policy.clone(),
            )
            .map_err(|e| format!("Invalid password configuration: {}", e))?,
        );

        let auth_service = Arc::new(AuthService::new(
            Arc::new(UserRepository::new(db.clone())),
            password_manager,
            jwt_manager.clone(),
        ));

        Ok(Self {
            auth_service,
            task_service: Arc::new(TaskService::new(db.clone())),
            day_record_service: Arc::new(DayRecordService::new(db.clone())),
            jwt_manager,
            db,
            config: Arc::new(config),
        })
    }
}

impl HasJwtManager for AppState {
    fn jwt_manager(&self) -> &Arc<JwtManager> {
        &self.jwt_manager
    }
}

/// 全ルートとミドルウェアを組み立てたルーター
pub fn app_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(handlers::auth_handler::auth_router(app_state.clone()))
        .merge(handlers::task_handler::task_router(app_state.clone()))
        .merge(handlers::day_record_handler::day_record_router(
            app_state.clone(),
        ));

    let cors = cors_layer(&app_state.config);

    Router::new()
        .nest("/api", api)
        .merge(handlers::system_handler::system_router(app_state))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(axum_middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
