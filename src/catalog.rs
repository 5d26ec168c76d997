use std::fmt;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::book::{BookDraft, BookId, BookRecord};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::graph::GenreGraph;
use crate::notify::{ChangeNotifier, SubscriptionId};
use crate::sorter::{merge_sort, SortKey};
use crate::store::{open_record_store, RecordStore, StoreError};

/// Main entry point for the catalog cache
///
/// Owns the in-memory ordered record sequence, the genre graph derived from
/// it, and the observer registry. All mutations flow through here: each one
/// persists to the record store first, applies the change in memory only on
/// store success, then rebuilds the graph and fires one change notification.
pub struct Catalog {
    /// Durable persistence collaborator
    store: Box<dyn RecordStore>,

    /// The authoritative in-memory record sequence
    books: Vec<BookRecord>,

    /// Genre adjacency structure, rebuilt after every mutation
    graph: GenreGraph,

    /// Observers notified after every successful mutation
    notifier: ChangeNotifier,
}

impl Catalog {
    /// Create an empty catalog over the given record store
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self {
            store,
            books: Vec::new(),
            graph: GenreGraph::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Open the configured record store and create an empty catalog over it
    ///
    /// The cache starts empty; call [`load`](Self::load) to populate it.
    pub fn open(config: &CatalogConfig) -> Result<Self> {
        let store = open_record_store(&config.store).map_err(CatalogError::Load)?;
        Ok(Self::new(store))
    }

    /// Replace the cache contents wholesale with the store's records
    ///
    /// On store failure the cache is left empty rather than partially
    /// populated, and no notification fires.
    pub fn load(&mut self) -> Result<()> {
        match self.store.load_all() {
            Ok(records) => {
                if let Some(id) = first_duplicate_id(&records) {
                    self.books.clear();
                    self.graph.clear();
                    return Err(CatalogError::Load(StoreError::Database(format!(
                        "store returned duplicate book id {id}"
                    ))));
                }

                debug!("loaded {} records from the store", records.len());
                self.books = records;
                self.finish_mutation();
                Ok(())
            }
            Err(err) => {
                warn!("load failed, cache cleared: {err}");
                self.books.clear();
                self.graph.clear();
                Err(CatalogError::Load(err))
            }
        }
    }

    /// Add a new book; the store assigns the id
    ///
    /// Fields are trimmed and validated before the store is contacted. On
    /// store failure the cache is unchanged and nothing is notified.
    pub fn add(&mut self, draft: BookDraft) -> Result<BookId> {
        let draft = draft.trimmed();
        validate(&draft)?;

        let id = self.store.create(&draft).map_err(|err| {
            warn!("store rejected create: {err}");
            CatalogError::StoreWrite(err)
        })?;

        self.books.push(draft.into_record(id));
        self.finish_mutation();
        Ok(id)
    }

    /// Replace the record with the given id, preserving its cache position
    ///
    /// Fails with `NotFound` without contacting the store when the id is
    /// absent from the cache.
    pub fn update(&mut self, id: BookId, draft: BookDraft) -> Result<()> {
        let pos = self
            .position(id)
            .ok_or(CatalogError::NotFound(id))?;

        let draft = draft.trimmed();
        validate(&draft)?;

        self.store.update_by_id(id, &draft).map_err(|err| {
            warn!("store rejected update of {id}: {err}");
            CatalogError::StoreWrite(err)
        })?;

        self.books[pos] = draft.into_record(id);
        self.finish_mutation();
        Ok(())
    }

    /// Remove the record with the given id
    pub fn delete(&mut self, id: BookId) -> Result<()> {
        let pos = self
            .position(id)
            .ok_or(CatalogError::NotFound(id))?;

        self.store.delete_by_id(id).map_err(|err| {
            warn!("store rejected delete of {id}: {err}");
            CatalogError::StoreWrite(err)
        })?;

        self.books.remove(pos);
        self.finish_mutation();
        Ok(())
    }

    /// Reorder the cache with a stable merge sort on the given key
    ///
    /// Sorting mutates cache order, so it rebuilds the graph (bucket order
    /// follows cache order) and notifies observers.
    pub fn sort(&mut self, key: SortKey) {
        merge_sort(&mut self.books, key);
        self.finish_mutation();
    }

    /// Empty the catalog, e.g. at session end
    pub fn clear(&mut self) {
        self.books.clear();
        self.finish_mutation();
    }

    /// Read-only view of the records in current cache order
    pub fn get_all(&self) -> &[BookRecord] {
        &self.books
    }

    /// Look up a record by id
    pub fn get(&self, id: BookId) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Number of cached records
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the cache holds no records
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The genre adjacency structure derived from the current cache
    pub fn graph(&self) -> &GenreGraph {
        &self.graph
    }

    /// Every book sharing the given book's genre, in bucket order
    ///
    /// Fails with `NotFound` when the id is absent; an empty result is not
    /// an error.
    pub fn related(&self, id: BookId) -> Result<Vec<BookRecord>> {
        let book = self.get(id).ok_or(CatalogError::NotFound(id))?;

        let Some(bucket) = self.graph.bucket(&book.genre) else {
            return Ok(Vec::new());
        };

        let by_id: FxHashMap<BookId, &BookRecord> =
            self.books.iter().map(|b| (b.id, b)).collect();

        Ok(bucket
            .iter()
            .filter(|&&related_id| related_id != id)
            .filter_map(|related_id| by_id.get(related_id))
            .map(|b| (*b).clone())
            .collect())
    }

    /// Register a change observer; fired after every successful mutation
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    /// Remove a change observer
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    // Every successful mutation ends here: one rebuild, one notification,
    // in that order.
    fn finish_mutation(&mut self) {
        self.graph.rebuild(&self.books);
        self.notifier.notify();
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books.len())
            .field("genres", &self.graph.genre_count())
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

fn validate(draft: &BookDraft) -> Result<()> {
    if draft.title.is_empty() {
        return Err(CatalogError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn first_duplicate_id(records: &[BookRecord]) -> Option<BookId> {
    let mut seen = FxHashMap::default();
    for record in records {
        if seen.insert(record.id, ()).is_some() {
            return Some(record.id);
        }
    }
    None
}
