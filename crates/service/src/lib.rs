//! Service layer: payload validation, sum computation and record storage.
//! - Repositories abstract the store (SeaORM or in-memory).
//! - Services combine validation, computation and storage per resource.

pub mod errors;
pub mod validation;
pub mod compute;
pub mod db;
pub mod sums;
pub mod records;
#[cfg(test)]
pub mod test_support;
