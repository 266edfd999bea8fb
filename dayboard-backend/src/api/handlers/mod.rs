// src/api/handlers/mod.rs
pub mod auth_handler;
pub mod day_record_handler;
pub mod system_handler;
pub mod task_handler;
