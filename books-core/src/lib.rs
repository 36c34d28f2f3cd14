//! Books Core Library
//!
//! This crate provides the book record types, the storage accessor and the
//! book service shared by the HTTP server and the command-line interface.

pub mod error;
pub mod sample;
pub mod service;
pub mod storage;
pub mod types;

pub use error::{Result, ServiceError, StorageError};
pub use service::BookService;
pub use storage::{BookStore, MemoryStore, SqliteStore};
pub use types::{Book, BookField, NewBook};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::from_new(1, NewBook::new("Test Book", "Someone", "Drama"));
        assert_eq!(book.title, "Test Book");
        assert_eq!(book.id, 1);
    }
}
