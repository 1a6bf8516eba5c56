use thiserror::Error;

/// Failures surfaced by the storage layer. Callers need the distinction
/// between a missing row, an illegal transition, and an underlying storage
/// fault to pick the right recovery path, so nothing collapses into a bool.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("illegal order status transition")]
    InvalidTransition,
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
