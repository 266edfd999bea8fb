// src/main.rs
use dayboard_backend::config::AppConfig;
use dayboard_backend::db::{create_db_pool, run_migrations};
use dayboard_backend::logging::init_tracing;
use dayboard_backend::{app_router, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting DayBoard backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    if app_config.run_migrations {
        run_migrations(&db_pool).await?;
        tracing::info!("Database migrations applied.");
    }

    let server_addr = app_config.server_addr();
    let app_state = AppState::new(db_pool, app_config)?;
    let app = app_router(app_state);

    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
    }
    tracing::info!("Shutdown signal received");
}
