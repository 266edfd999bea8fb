// src/db.rs
use crate::config::AppConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

/// 設定から接続プールを作成
pub async fn create_db_pool(config: &AppConfig) -> Result<DbPool, DbErr> {
    connect(&config.database_url).await
}

pub async fn connect(database_url: &str) -> Result<DbPool, DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_string());

    if is_in_memory_sqlite(database_url) {
        // インメモリDBは接続ごとに別のDBになるため、単一接続を使い回す
        opt.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
    } else {
        opt.max_connections(100)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(8))
            .max_lifetime(Duration::from_secs(8 * 60));
    }

    Database::connect(opt).await
}

/// 未適用のマイグレーションを実行
pub async fn run_migrations(conn: &DbPool) -> Result<(), DbErr> {
    Migrator::up(conn, None).await
}

fn is_in_memory_sqlite(database_url: &str) -> bool {
    database_url.starts_with("sqlite") && database_url.contains(":memory:")
}
