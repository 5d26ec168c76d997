// Record store module for the catalog cache
//
// The catalog mirrors whatever a record store holds; this module provides
// the store contract plus the shipped backends (SQLite and in-memory).

mod error;
mod memory_store;
mod sqlite_store;

use crate::book::{BookDraft, BookId, BookRecord};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Re-exports
pub use error::{StoreError, StoreResult};
pub use memory_store::MemoryRecordStore;
pub use sqlite_store::SqliteRecordStore;

/// Durable persistence collaborator for book records
///
/// The catalog never guesses an id: `create` is where ids come from.
/// Implementations are invoked synchronously from a single caller context,
/// so methods take `&self` and need no internal locking.
pub trait RecordStore {
    /// Load every persisted record, in id order
    fn load_all(&self) -> StoreResult<Vec<BookRecord>>;

    /// Persist a new record and return its assigned id
    fn create(&self, draft: &BookDraft) -> StoreResult<BookId>;

    /// Overwrite the record with the given id
    fn update_by_id(&self, id: BookId, draft: &BookDraft) -> StoreResult<()>;

    /// Remove the record with the given id
    fn delete_by_id(&self, id: BookId) -> StoreResult<()>;
}

/// Available record store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreType {
    /// SQLite-backed durable store
    Sqlite,
    /// In-memory store for tests or small datasets
    Memory,
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Which backend to open
    pub store_type: StoreType,

    /// Path to the database file (required for SQLite)
    pub path: Option<PathBuf>,

    /// Whether to create the database file if it does not exist
    pub create_if_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_type: StoreType::Sqlite,
            path: None,
            create_if_missing: true,
        }
    }
}

// Factory function to create a record store based on configuration
pub fn open_record_store(config: &StoreConfig) -> StoreResult<Box<dyn RecordStore>> {
    match config.store_type {
        StoreType::Sqlite => {
            let store = SqliteRecordStore::open(config)?;
            Ok(Box::new(store))
        }
        StoreType::Memory => Ok(Box::new(MemoryRecordStore::new())),
    }
}
