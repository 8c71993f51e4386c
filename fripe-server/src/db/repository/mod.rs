//! Repository Module
//!
//! Parameterized SQL access to the SQLite store, one repository per table.

pub mod listing;
pub mod order;
pub mod user;

pub use listing::ListingRepository;
pub use order::OrderRepository;
pub use user::UserRepository;

use sqlx::SqlitePool;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A stored enum column holds a value outside the known set
    #[error("Unknown stored state: {0}")]
    UnknownState(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::ColumnDecode { source, .. }
                if source.to_string().starts_with("unknown order status")
                    || source.to_string().starts_with("unknown reception mode") =>
            {
                RepoError::UnknownState(source.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database pool reference
#[derive(Clone)]
pub struct BaseRepository {
    pool: SqlitePool,
}

impl BaseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
