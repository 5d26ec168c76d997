use rusqlite::{params, Connection, OpenFlags};

use crate::book::{BookDraft, BookId, BookRecord};
use crate::store::error::{StoreError, StoreResult};
use crate::store::{RecordStore, StoreConfig};

/// SQLite-backed record store
pub struct SqliteRecordStore {
    /// SQLite connection
    conn: Connection,
}

impl SqliteRecordStore {
    /// Open (and if configured, create) the database at the configured path
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let path = config
            .path
            .clone()
            .ok_or_else(|| StoreError::Config("SQLite store requires a path".to_string()))?;

        let mut open_flags = OpenFlags::SQLITE_OPEN_READ_WRITE;
        if config.create_if_missing {
            open_flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let conn = Connection::open_with_flags(path, open_flags)
            .map_err(|e| StoreError::Database(format!("failed to open SQLite database: {e}")))?;

        // WAL keeps readers cheap while the single writer persists
        conn.execute_batch("PRAGMA journal_mode = WAL;")
            .map_err(|e| StoreError::Database(format!("failed to set WAL mode: {e}")))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT,
                genre TEXT,
                publisher TEXT,
                year INTEGER,
                copies INTEGER,
                image_path TEXT
            );",
        )
        .map_err(|e| StoreError::Database(format!("failed to create tables: {e}")))?;

        Ok(Self { conn })
    }
}

impl RecordStore for SqliteRecordStore {
    fn load_all(&self) -> StoreResult<Vec<BookRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, author, genre, publisher, year, copies, image_path
             FROM books ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(BookRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                author: row.get(2)?,
                genre: row.get(3)?,
                publisher: row.get(4)?,
                year: row.get(5)?,
                copies: row.get(6)?,
                image_path: row.get(7)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }

        Ok(records)
    }

    fn create(&self, draft: &BookDraft) -> StoreResult<BookId> {
        self.conn.execute(
            "INSERT INTO books (title, author, genre, publisher, year, copies, image_path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                draft.title,
                draft.author,
                draft.genre,
                draft.publisher,
                draft.year,
                draft.copies,
                draft.image_path,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_by_id(&self, id: BookId, draft: &BookDraft) -> StoreResult<()> {
        let affected = self.conn.execute(
            "UPDATE books
             SET title = ?1, author = ?2, genre = ?3, publisher = ?4,
                 year = ?5, copies = ?6, image_path = ?7
             WHERE id = ?8",
            params![
                draft.title,
                draft.author,
                draft.genre,
                draft.publisher,
                draft.year,
                draft.copies,
                draft.image_path,
                id,
            ],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn delete_by_id(&self, id: BookId) -> StoreResult<()> {
        let affected = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1", params![id])?;

        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreType;
    use tempfile::tempdir;

    fn open_store(path: &std::path::Path) -> SqliteRecordStore {
        let config = StoreConfig {
            store_type: StoreType::Sqlite,
            path: Some(path.to_path_buf()),
            create_if_missing: true,
        };
        SqliteRecordStore::open(&config).unwrap()
    }

    #[test]
    fn test_create_assigns_ascending_ids() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir.path().join("books.db"));

        let first = store.create(&BookDraft::new("1984")).unwrap();
        let second = store.create(&BookDraft::new("Animal Farm")).unwrap();

        assert!(second > first);
    }

    #[test]
    fn test_load_all_returns_records_in_id_order() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir.path().join("books.db"));

        store
            .create(&BookDraft::new("Dune").with_author("Frank Herbert"))
            .unwrap();
        store
            .create(&BookDraft::new("1984").with_author("George Orwell"))
            .unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Dune");
        assert_eq!(records[1].title, "1984");
        assert!(records[0].id < records[1].id);
    }

    #[test]
    fn test_update_by_id() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir.path().join("books.db"));

        let id = store.create(&BookDraft::new("Dune")).unwrap();
        store
            .update_by_id(id, &BookDraft::new("Dune Messiah").with_year(1969))
            .unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records[0].title, "Dune Messiah");
        assert_eq!(records[0].year, 1969);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir.path().join("books.db"));

        let result = store.update_by_id(42, &BookDraft::new("Ghost"));
        assert!(matches!(result, Err(StoreError::NotFound(42))));
    }

    #[test]
    fn test_delete_by_id() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir.path().join("books.db"));

        let id = store.create(&BookDraft::new("Dune")).unwrap();
        store.delete_by_id(id).unwrap();

        assert!(store.load_all().unwrap().is_empty());
        assert!(matches!(
            store.delete_by_id(id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.db");

        let id = {
            let store = open_store(&path);
            store
                .create(&BookDraft::new("Dune").with_genre("SciFi"))
                .unwrap()
        };

        let store = open_store(&path);
        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].genre, "SciFi");
    }
}
