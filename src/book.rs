use serde::{Deserialize, Serialize};

/// Identifier assigned to a record by the record store on creation.
///
/// Ids are non-negative, unique within a catalog, and immutable once
/// assigned. The engine never invents one itself.
pub type BookId = i64;

/// A book record as held in the catalog cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Store-assigned identifier
    pub id: BookId,

    /// Title of the book (never empty)
    pub title: String,

    /// Author name
    pub author: String,

    /// Genre text, used as a case-insensitive grouping key
    pub genre: String,

    /// Publisher name
    pub publisher: String,

    /// Year of publication
    pub year: i32,

    /// Number of copies held
    pub copies: u32,

    /// Opaque reference to a cover image; the engine never checks it exists
    pub image_path: String,
}

impl BookRecord {
    /// Turn the record back into an id-less draft, e.g. to feed an update
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            publisher: self.publisher.clone(),
            year: self.year,
            copies: self.copies,
            image_path: self.image_path.clone(),
        }
    }
}

/// The attribute set of a book without an identifier
///
/// Drafts are what callers hand to `Catalog::add` and `Catalog::update`,
/// and what the record store receives when persisting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publisher: String,
    pub year: i32,
    pub copies: u32,
    pub image_path: String,
}

impl BookDraft {
    /// Create a draft with the given title and all other fields empty
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Set the publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    /// Set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the number of copies
    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    /// Set the cover image reference
    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }

    /// Return a copy with surrounding whitespace stripped from every text field
    pub(crate) fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            year: self.year,
            copies: self.copies,
            image_path: self.image_path.trim().to_string(),
        }
    }

    /// Combine the draft with a store-assigned id into a full record
    pub(crate) fn into_record(self, id: BookId) -> BookRecord {
        BookRecord {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            publisher: self.publisher,
            year: self.year,
            copies: self.copies,
            image_path: self.image_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_builder() {
        let draft = BookDraft::new("Dune")
            .with_author("Frank Herbert")
            .with_genre("SciFi")
            .with_publisher("Chilton Books")
            .with_year(1965)
            .with_copies(3)
            .with_image_path("covers/dune.png");

        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.author, "Frank Herbert");
        assert_eq!(draft.genre, "SciFi");
        assert_eq!(draft.publisher, "Chilton Books");
        assert_eq!(draft.year, 1965);
        assert_eq!(draft.copies, 3);
        assert_eq!(draft.image_path, "covers/dune.png");
    }

    #[test]
    fn test_trimmed_strips_whitespace() {
        let draft = BookDraft::new("  Dune  ")
            .with_author(" Frank Herbert ")
            .with_genre("\tSciFi\n")
            .trimmed();

        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.author, "Frank Herbert");
        assert_eq!(draft.genre, "SciFi");
    }

    #[test]
    fn test_into_record_keeps_fields() {
        let record = BookDraft::new("1984")
            .with_author("George Orwell")
            .with_year(1949)
            .into_record(7);

        assert_eq!(record.id, 7);
        assert_eq!(record.title, "1984");
        assert_eq!(record.author, "George Orwell");
        assert_eq!(record.year, 1949);
    }

    #[test]
    fn test_to_draft_round_trip() {
        let record = BookDraft::new("1984")
            .with_author("George Orwell")
            .with_genre("Dystopian")
            .into_record(1);

        assert_eq!(record.to_draft().into_record(1), record);
    }
}
