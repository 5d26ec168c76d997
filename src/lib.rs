//! # Shelf Cache
//!
//! Shelf Cache is an embedded catalog cache for book-lending applications.
//! It mirrors persisted book records in memory, keeps them sorted and
//! searchable, derives genre-based recommendations, and notifies observers
//! whenever the cached view changes.
//!
//! ## Features
//!
//! - In-memory record cache backed by a pluggable record store (SQLite or
//!   in-memory), with store-first mutation semantics
//! - Stable merge sort by title or author
//! - Hybrid search: exact-title binary search with a linear substring
//!   fallback that is always correct
//! - Genre adjacency graph for "same-genre" recommendations
//! - Parameterless change notifications with subscribe/unsubscribe
//!
//! ## Example
//!
//! ```rust
//! use shelf_cache::{BookDraft, Catalog, MemoryRecordStore, SortKey};
//!
//! // Create a catalog over an in-memory store
//! let mut catalog = Catalog::new(Box::new(MemoryRecordStore::new()));
//!
//! // Add books; the store assigns the ids
//! catalog.add(BookDraft::new("Dune")
//!     .with_author("Frank Herbert")
//!     .with_genre("SciFi")).unwrap();
//! let id = catalog.add(BookDraft::new("1984")
//!     .with_author("George Orwell")
//!     .with_genre("Dystopian")).unwrap();
//!
//! // Sort by title, then search
//! catalog.sort(SortKey::Title);
//! let results = catalog.search("dune");
//! assert_eq!(results.len(), 1);
//!
//! // Same-genre recommendations
//! let related = catalog.related(id).unwrap();
//! assert!(related.is_empty());
//! ```

mod book;
mod catalog;
mod config;
mod error;
mod graph;
mod notify;
mod search;
mod sorter;
mod stats;
mod store;

// Re-export public API
pub use book::{BookDraft, BookId, BookRecord};
pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use graph::GenreGraph;
pub use notify::{ChangeNotifier, SubscriptionId};
pub use sorter::SortKey;

// Re-export store API
pub use store::{
    open_record_store,
    MemoryRecordStore,
    RecordStore,
    SqliteRecordStore,
    StoreConfig,
    StoreError,
    StoreResult,
    StoreType,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
