use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// A storage-level unique constraint rejected the write.
    ///
    /// Uniqueness is enforced here and not only by the service-level
    /// pre-check, so two concurrent creates of the same name cannot both
    /// slip past the read-then-write window.
    #[error("unique constraint violated")]
    Conflict,
    /// A connection could not be checked out of the pool.
    #[error("connection pool error: {0}")]
    Connection(#[from] diesel::r2d2::PoolError),
    /// Any other Diesel failure.
    #[error("database error: {0}")]
    Database(DieselError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => Self::Conflict,
            other => Self::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
