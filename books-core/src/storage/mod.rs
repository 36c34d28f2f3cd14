//! Storage accessor for book rows

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StorageError;
use crate::types::{Book, NewBook};
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract book store.
///
/// Implementations report a missing row as [`StorageError::NotFound`] so the
/// service can tell it apart from backend failures.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Create the books table if it does not exist yet
    async fn ensure_schema(&self) -> StorageResult<()>;

    /// Insert a row and return the id assigned to it
    async fn insert(&self, book: &NewBook) -> StorageResult<i64>;

    /// Every row, in insertion order
    async fn list_all(&self) -> StorageResult<Vec<Book>>;

    async fn get_by_id(&self, id: i64) -> StorageResult<Book>;

    /// Overwrite title, author and genre of an existing row
    async fn update(&self, id: i64, book: &NewBook) -> StorageResult<()>;

    async fn delete(&self, id: i64) -> StorageResult<()>;
}
