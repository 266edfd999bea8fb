// tests/integration/mod.rs

pub mod auth;
pub mod day_records;
pub mod system_tests;
