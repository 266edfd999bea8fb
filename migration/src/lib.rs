// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20250801_000001_create_users_table;
mod m20250801_000002_create_tasks_table;
mod m20250801_000003_create_day_records_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. ユーザーテーブル（依存関係なし）
            Box::new(m20250801_000001_create_users_table::Migration),
            // 2. usersに依存するテーブル
            Box::new(m20250801_000002_create_tasks_table::Migration),
            Box::new(m20250801_000003_create_day_records_table::Migration),
        ]
    }
}
