use rustc_hash::FxHashMap;

use crate::book::{BookId, BookRecord};

/// Normalized grouping key for a genre
pub(crate) fn genre_key(genre: &str) -> String {
    genre.trim().to_lowercase()
}

/// Adjacency structure for genre-based recommendations
///
/// Maps a normalized genre key to the ids of every book in that genre, in
/// cache order. Fully derived data: the catalog rebuilds it after each
/// mutation, so the id set across all buckets always equals the cache's id
/// set and no bucket is ever empty. Books with empty genre text bucket
/// under the empty key.
#[derive(Debug, Clone, Default)]
pub struct GenreGraph {
    buckets: FxHashMap<String, Vec<BookId>>,
}

impl GenreGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Clear and repopulate the buckets from one pass over the cache
    pub(crate) fn rebuild(&mut self, books: &[BookRecord]) {
        self.buckets.clear();
        for book in books {
            self.buckets
                .entry(genre_key(&book.genre))
                .or_default()
                .push(book.id);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Ids in the given genre, in cache order; the genre text is normalized
    pub fn bucket(&self, genre: &str) -> Option<&[BookId]> {
        self.buckets.get(&genre_key(genre)).map(Vec::as_slice)
    }

    /// Number of distinct genres currently represented
    pub fn genre_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate all buckets as (normalized genre key, ids)
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[BookId])> {
        self.buckets
            .iter()
            .map(|(key, ids)| (key.as_str(), ids.as_slice()))
    }
}
