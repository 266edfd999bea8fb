// src/repository/mod.rs
pub mod day_record_repository;
pub mod task_repository;
pub mod user_repository;
