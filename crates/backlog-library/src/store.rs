//! Library store using SQLite

use crate::LibraryError;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use tracing::debug;

/// A user-named collection of saved game records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    pub id: i64,
    pub name: String,
}

/// A persisted copy of a game's metadata and user-tracked state
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub game_id: i64,
    pub title: String,
    pub platform: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub score: Option<i64>,
    pub done: bool,
}

/// Library store manager
///
/// Owns one connection; every operation is a short synchronous transaction.
/// Within a library, records are unique by `game_id` and kept in insertion
/// order. The same game may be saved into any number of libraries, each
/// holding an independent copy.
pub struct LibraryStore {
    conn: Connection,
}

impl LibraryStore {
    /// Open or create a store
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let conn = Connection::open(path)?;

        let store = Self { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> Result<Self, LibraryError> {
        let conn = Connection::open_in_memory()?;

        let store = Self { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// Initialize store schema
    fn init_schema(&self) -> Result<(), LibraryError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS libraries (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TEXT DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS records (
                library_id INTEGER NOT NULL,
                game_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                platform TEXT NOT NULL,
                description TEXT,
                image_url TEXT,
                score INTEGER,
                done INTEGER NOT NULL DEFAULT 0,
                saved_at TEXT DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (library_id, game_id),
                FOREIGN KEY (library_id) REFERENCES libraries(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_records_title ON records(library_id, title);
        "#,
        )?;

        Ok(())
    }

    /// Create a library
    ///
    /// Names are not required to be unique; two libraries may share a name.
    pub fn create_library(&self, name: &str) -> Result<Library, LibraryError> {
        self.conn.execute(
            "INSERT INTO libraries (name) VALUES (?1)",
            params![name],
        )?;

        let library = Library {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
        };
        debug!(id = library.id, name, "created library");

        Ok(library)
    }

    /// Get all libraries in creation order
    pub fn list_libraries(&self) -> Result<Vec<Library>, LibraryError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM libraries ORDER BY id")?;

        let libraries = stmt
            .query_map([], Self::row_to_library)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(libraries)
    }

    /// Get a library by ID
    pub fn get_library(&self, id: i64) -> Result<Option<Library>, LibraryError> {
        let library = self
            .conn
            .query_row(
                "SELECT id, name FROM libraries WHERE id = ?1",
                params![id],
                Self::row_to_library,
            )
            .optional()?;

        Ok(library)
    }

    /// Delete a library and all records it contains
    ///
    /// No-op if the library is already absent.
    pub fn delete_library(&mut self, id: i64) -> Result<(), LibraryError> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM records WHERE library_id = ?1", params![id])?;
        let removed = tx.execute("DELETE FROM libraries WHERE id = ?1", params![id])?;
        tx.commit()?;

        if removed > 0 {
            debug!(id, "deleted library");
        }
        Ok(())
    }

    /// Save a record into a library
    ///
    /// Appends a copy of `record`. Fails with [`LibraryError::DuplicateRecord`]
    /// when the library already holds a record with the same `game_id`, and
    /// with [`LibraryError::LibraryNotFound`] when the library does not exist.
    /// The guard and the insert run in one transaction, so a failed save
    /// leaves the store unchanged.
    pub fn save_record(
        &mut self,
        library_id: i64,
        record: &GameRecord,
    ) -> Result<(), LibraryError> {
        let tx = self.conn.transaction()?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM libraries WHERE id = ?1)",
            params![library_id],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(LibraryError::LibraryNotFound(library_id));
        }

        // Duplicate guard: first match wins, nothing is written.
        let duplicate: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM records WHERE library_id = ?1 AND game_id = ?2)",
            params![library_id, record.game_id],
            |row| row.get(0),
        )?;
        if duplicate {
            return Err(LibraryError::DuplicateRecord {
                library_id,
                game_id: record.game_id,
            });
        }

        tx.execute(
            r#"INSERT INTO records
               (library_id, game_id, title, platform, description, image_url, score, done)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"#,
            params![
                library_id,
                record.game_id,
                record.title,
                record.platform,
                record.description,
                record.image_url,
                record.score,
                record.done,
            ],
        )?;
        tx.commit()?;

        debug!(library_id, game_id = record.game_id, "saved record");
        Ok(())
    }

    /// Delete one record from a library
    ///
    /// No-op if the record is absent.
    pub fn delete_record(&self, library_id: i64, game_id: i64) -> Result<(), LibraryError> {
        let removed = self.conn.execute(
            "DELETE FROM records WHERE library_id = ?1 AND game_id = ?2",
            params![library_id, game_id],
        )?;

        if removed > 0 {
            debug!(library_id, game_id, "deleted record");
        }
        Ok(())
    }

    /// Get a library's records in insertion order
    pub fn list_records(&self, library_id: i64) -> Result<Vec<GameRecord>, LibraryError> {
        let mut stmt = self.conn.prepare(
            r#"SELECT game_id, title, platform, description, image_url, score, done
               FROM records WHERE library_id = ?1 ORDER BY rowid"#,
        )?;

        let records = stmt
            .query_map(params![library_id], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Check whether a library holds a record for a game
    pub fn contains_record(&self, library_id: i64, game_id: i64) -> Result<bool, LibraryError> {
        let found: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM records WHERE library_id = ?1 AND game_id = ?2)",
            params![library_id, game_id],
            |row| row.get(0),
        )?;

        Ok(found)
    }

    /// Search a library's records by title
    pub fn search_records(
        &self,
        library_id: i64,
        query: &str,
    ) -> Result<Vec<GameRecord>, LibraryError> {
        let mut stmt = self.conn.prepare(
            r#"SELECT game_id, title, platform, description, image_url, score, done
               FROM records WHERE library_id = ?1 AND title LIKE ?2 ORDER BY rowid"#,
        )?;

        let pattern = format!("%{}%", query);
        let records = stmt
            .query_map(params![library_id, pattern], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Get a library's record count
    pub fn record_count(&self, library_id: i64) -> Result<i64, LibraryError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM records WHERE library_id = ?1",
            params![library_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Get the total library count
    pub fn library_count(&self) -> Result<i64, LibraryError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM libraries", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Convert a row to a Library
    fn row_to_library(row: &rusqlite::Row) -> rusqlite::Result<Library> {
        Ok(Library {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }

    /// Convert a row to a GameRecord
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<GameRecord> {
        Ok(GameRecord {
            game_id: row.get("game_id")?,
            title: row.get("title")?,
            platform: row.get("platform")?,
            description: row.get("description")?,
            image_url: row.get("image_url")?,
            score: row.get("score")?,
            done: row.get("done")?,
        })
    }
}
