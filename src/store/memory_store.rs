use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::book::{BookDraft, BookId, BookRecord};
use crate::store::error::{StoreError, StoreResult};
use crate::store::RecordStore;

/// In-memory record store for tests or small datasets
///
/// Clones share the same underlying state, so a test can hand one handle to
/// the catalog and keep another to inspect the store or inject failures:
///
/// ```
/// use shelf_cache::{BookDraft, Catalog, MemoryRecordStore};
///
/// let store = MemoryRecordStore::new();
/// let mut catalog = Catalog::new(Box::new(store.clone()));
///
/// store.fail_writes(true);
/// assert!(catalog.add(BookDraft::new("Dune")).is_err());
/// ```
#[derive(Clone)]
pub struct MemoryRecordStore {
    inner: Rc<Inner>,
}

struct Inner {
    books: RefCell<Vec<BookRecord>>,
    next_id: Cell<BookId>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryRecordStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                books: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                fail_reads: Cell::new(false),
                fail_writes: Cell::new(false),
            }),
        }
    }

    /// Create a store pre-seeded with records; ids continue past the highest
    pub fn with_books(books: Vec<BookRecord>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            inner: Rc::new(Inner {
                books: RefCell::new(books),
                next_id: Cell::new(next_id),
                fail_reads: Cell::new(false),
                fail_writes: Cell::new(false),
            }),
        }
    }

    /// Make every subsequent `load_all` fail until switched back off
    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.set(fail);
    }

    /// Make every subsequent write fail until switched back off
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }

    /// Number of records currently persisted
    pub fn record_count(&self) -> usize {
        self.inner.books.borrow().len()
    }

    fn check_write(&self) -> StoreResult<()> {
        if self.inner.fail_writes.get() {
            return Err(StoreError::Database("simulated write failure".to_string()));
        }
        Ok(())
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_all(&self) -> StoreResult<Vec<BookRecord>> {
        if self.inner.fail_reads.get() {
            return Err(StoreError::Database("simulated read failure".to_string()));
        }
        Ok(self.inner.books.borrow().clone())
    }

    fn create(&self, draft: &BookDraft) -> StoreResult<BookId> {
        self.check_write()?;

        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .books
            .borrow_mut()
            .push(draft.clone().into_record(id));

        Ok(id)
    }

    fn update_by_id(&self, id: BookId, draft: &BookDraft) -> StoreResult<()> {
        self.check_write()?;

        let mut books = self.inner.books.borrow_mut();
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                *book = draft.clone().into_record(id);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn delete_by_id(&self, id: BookId) -> StoreResult<()> {
        self.check_write()?;

        let mut books = self.inner.books.borrow_mut();
        match books.iter().position(|b| b.id == id) {
            Some(pos) => {
                books.remove(pos);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
