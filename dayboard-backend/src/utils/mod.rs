// src/utils/mod.rs

pub mod date;
pub mod jwt;
pub mod password;
pub mod validation;
