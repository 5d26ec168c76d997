use crate::book::BookId;
use crate::store::StoreError;
use thiserror::Error;

/// Custom error types for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The record store failed while loading the catalog
    #[error("failed to load records from the store: {0}")]
    Load(#[source] StoreError),

    /// The operation referenced an id absent from the cache
    #[error("book with id {0} not found")]
    NotFound(BookId),

    /// Caller-supplied fields violate the record constraints
    #[error("invalid book fields: {0}")]
    Validation(String),

    /// The record store rejected a create, update, or delete
    #[error("store rejected the write: {0}")]
    StoreWrite(#[source] StoreError),
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
