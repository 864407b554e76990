//! Game backlog library store
//!
//! Persists user-named libraries of saved game records in SQLite and guards
//! every save against duplicate game identifiers within a library.

mod listing;
mod store;

pub use listing::GameListing;
pub use store::{GameRecord, Library, LibraryStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("Library not found: {0}")]
    LibraryNotFound(i64),

    #[error("Game {game_id} already saved to library {library_id}")]
    DuplicateRecord { library_id: i64, game_id: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
