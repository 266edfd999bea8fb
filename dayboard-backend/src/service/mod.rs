// src/service/mod.rs
pub mod auth_service;
pub mod day_lock;
pub mod day_record_service;
pub mod task_service;
