use thiserror::Error;

/// Errors that can occur while reading from a repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid data in {table}: {reason}")]
    InvalidData { table: &'static str, reason: String },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
