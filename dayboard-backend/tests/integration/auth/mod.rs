// tests/integration/auth/mod.rs

pub mod visibility_tests;
