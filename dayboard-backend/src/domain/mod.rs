// src/domain/mod.rs
pub mod day_record_model;
pub mod productivity;
pub mod task_model;
pub mod user_model;
