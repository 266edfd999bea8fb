// tests/integration/day_records/mod.rs

pub mod public_schedule_tests;
