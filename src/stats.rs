use rustc_hash::FxHashMap;

use crate::catalog::Catalog;
use crate::graph::genre_key;

impl Catalog {
    /// The genre with the most records, in its first-seen original casing
    ///
    /// Records with empty genre text are ignored; ties break alphabetically
    /// on the normalized key. `None` when nothing qualifies.
    pub fn top_genre(&self) -> Option<String> {
        let mut counts: FxHashMap<String, (usize, String)> = FxHashMap::default();

        for book in self.get_all() {
            let key = genre_key(&book.genre);
            if key.is_empty() {
                continue;
            }
            counts
                .entry(key)
                .or_insert_with(|| (0, book.genre.trim().to_string()))
                .0 += 1;
        }

        let mut best: Option<(&String, &(usize, String))> = None;
        for entry in &counts {
            best = match best {
                None => Some(entry),
                Some(current) => {
                    let (key, (count, _)) = entry;
                    let (best_key, (best_count, _)) = current;
                    if count > best_count || (count == best_count && key < best_key) {
                        Some(entry)
                    } else {
                        Some(current)
                    }
                }
            };
        }

        best.map(|(_, (_, display))| display.clone())
    }

    /// Title of the most recently added record (highest store-assigned id)
    pub fn last_added_title(&self) -> Option<String> {
        self.get_all()
            .iter()
            .max_by_key(|book| book.id)
            .map(|book| book.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::book::BookDraft;
    use crate::catalog::Catalog;
    use crate::sorter::SortKey;
    use crate::store::MemoryRecordStore;

    fn catalog() -> Catalog {
        Catalog::new(Box::new(MemoryRecordStore::new()))
    }

    #[test]
    fn test_top_genre_counts_case_insensitively() {
        let mut catalog = catalog();
        catalog
            .add(BookDraft::new("1984").with_genre("Dystopian"))
            .unwrap();
        catalog
            .add(BookDraft::new("Animal Farm").with_genre("dystopian"))
            .unwrap();
        catalog
            .add(BookDraft::new("Dune").with_genre("SciFi"))
            .unwrap();

        assert_eq!(catalog.top_genre().as_deref(), Some("Dystopian"));
    }

    #[test]
    fn test_top_genre_ignores_empty_genres() {
        let mut catalog = catalog();
        catalog.add(BookDraft::new("Untagged one")).unwrap();
        catalog.add(BookDraft::new("Untagged two")).unwrap();

        assert_eq!(catalog.top_genre(), None);

        catalog
            .add(BookDraft::new("Dune").with_genre("SciFi"))
            .unwrap();
        assert_eq!(catalog.top_genre().as_deref(), Some("SciFi"));
    }

    #[test]
    fn test_top_genre_empty_catalog() {
        assert_eq!(catalog().top_genre(), None);
    }

    #[test]
    fn test_last_added_title_follows_ids_not_order() {
        let mut catalog = catalog();
        catalog.add(BookDraft::new("Zorba the Greek")).unwrap();
        catalog.add(BookDraft::new("1984")).unwrap();

        // Sorting reorders the cache; the highest id still wins
        catalog.sort(SortKey::Title);
        assert_eq!(catalog.last_added_title().as_deref(), Some("1984"));
    }

    #[test]
    fn test_last_added_title_empty_catalog() {
        assert_eq!(catalog().last_added_title(), None);
    }
}
