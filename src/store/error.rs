use crate::book::BookId;
use std::io;
use thiserror::Error;

/// Store-specific error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Database(String),

    #[error("no record with id {0} in the store")]
    NotFound(BookId),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Config(String),
}

// Map the SQLite backend's errors the way other backends would map theirs.
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for record store operations
pub type StoreResult<T> = Result<T, StoreError>;
