// src/api/dto/mod.rs
pub mod auth_dto;
pub mod common;
pub mod day_record_dto;
pub mod task_dto;
