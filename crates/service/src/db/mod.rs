//! SeaORM query helpers shared by the repository implementations.

pub mod sum_service;
pub mod record_service;
