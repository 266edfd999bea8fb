// src/extractors/mod.rs
pub mod uuid;
pub mod validated;

pub use self::uuid::ValidatedUuid;
pub use self::validated::{ValidatedJson, ValidatedQuery};
