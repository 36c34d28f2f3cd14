use super::{BookStore, StorageResult};
use crate::error::StorageError;
use crate::types::{Book, NewBook};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};

const CREATE_BOOKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    genre TEXT NOT NULL
)";

/// SQLite-backed book store.
///
/// A single connection is shared by every caller. Statements run on the
/// blocking thread pool while holding the connection lock.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Opening SQLite database at {}", path.display());
        Ok(Self::from_connection(Connection::open(path)?))
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    /// Wrap an already opened connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| StorageError::Task("connection lock poisoned".to_string()))?;
            f(&guard)
        })
        .await
        .map_err(|e| StorageError::Task(e.to_string()))?
    }
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        genre: row.get(3)?,
    })
}

#[async_trait]
impl BookStore for SqliteStore {
    async fn ensure_schema(&self) -> StorageResult<()> {
        self.with_conn(|conn| {
            conn.execute(CREATE_BOOKS_TABLE, [])?;
            Ok(())
        })
        .await
    }

    async fn insert(&self, book: &NewBook) -> StorageResult<i64> {
        let book = book.clone();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO books (title, author, genre) VALUES (?1, ?2, ?3)",
                params![book.title, book.author, book.genre],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn list_all(&self) -> StorageResult<Vec<Book>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, title, author, genre FROM books ORDER BY id")?;
            let books = stmt
                .query_map([], book_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(books)
        })
        .await
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<Book> {
        self.with_conn(move |conn| {
            conn.query_row(
                "SELECT id, title, author, genre FROM books WHERE id = ?1",
                params![id],
                book_from_row,
            )
            .optional()?
            .ok_or(StorageError::NotFound(id))
        })
        .await
    }

    async fn update(&self, id: i64, book: &NewBook) -> StorageResult<()> {
        let book = book.clone();
        self.with_conn(move |conn| {
            let changed = conn.execute(
                "UPDATE books SET title = ?1, author = ?2, genre = ?3 WHERE id = ?4",
                params![book.title, book.author, book.genre, id],
            )?;
            if changed == 0 {
                return Err(StorageError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        self.with_conn(move |conn| {
            let changed = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
            if changed == 0 {
                return Err(StorageError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}
