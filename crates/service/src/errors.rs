use thiserror::Error;

use crate::validation::Rejection;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request payload failed validation; always the caller's fault.
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn db(e: impl std::fmt::Display) -> Self { Self::Db(e.to_string()) }
}
