use crate::book::BookRecord;
use crate::catalog::Catalog;

impl Catalog {
    /// Find records matching a free-text query
    ///
    /// An empty or whitespace query returns the full catalog. Otherwise the
    /// exact-title fast path runs first: a binary search over the current
    /// cache order, expanded to the adjacent records sharing the same title
    /// (duplicates sit together after a stable title sort). The fast path
    /// is only effective when the caller sorted by title beforehand; order
    /// is never trusted blindly, so a miss always falls through to a linear
    /// scan matching the query as a case-insensitive substring of title,
    /// author, genre, or publisher, in cache order.
    pub fn search(&self, query: &str) -> Vec<BookRecord> {
        let needle = normalize(query);
        let books = self.get_all();

        if needle.is_empty() {
            return books.to_vec();
        }

        if let Some(hit) = binary_search_title(books, &needle) {
            return collect_adjacent(books, hit, &needle);
        }

        books
            .iter()
            .filter(|book| matches_partial(book, &needle))
            .cloned()
            .collect()
    }
}

/// Normalize text for comparisons: trim surrounding whitespace, lowercase
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Binary search the sequence for an exact (normalized) title match
///
/// Only meaningful when the sequence is title-sorted; on unsorted input it
/// may miss, which the caller treats as "fall back to the linear scan".
fn binary_search_title(books: &[BookRecord], needle: &str) -> Option<usize> {
    let mut left = 0usize;
    let mut right = books.len();

    while left < right {
        let mid = left + (right - left) / 2;
        let title = normalize(&books[mid].title);

        match title.as_str().cmp(needle) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    }

    None
}

/// Expand a hit to every adjacent record with the same normalized title
fn collect_adjacent(books: &[BookRecord], hit: usize, needle: &str) -> Vec<BookRecord> {
    let mut lo = hit;
    while lo > 0 && normalize(&books[lo - 1].title) == needle {
        lo -= 1;
    }

    let mut hi = hit + 1;
    while hi < books.len() && normalize(&books[hi].title) == needle {
        hi += 1;
    }

    books[lo..hi].to_vec()
}

fn matches_partial(book: &BookRecord, needle: &str) -> bool {
    normalize(&book.title).contains(needle)
        || normalize(&book.author).contains(needle)
        || normalize(&book.genre).contains(needle)
        || normalize(&book.publisher).contains(needle)
}
