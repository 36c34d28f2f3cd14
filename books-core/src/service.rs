//! Book service: validation and orchestration over a [`BookStore`]

use crate::error::Result;
use crate::sample::sample_books;
use crate::storage::BookStore;
use crate::types::{Book, BookField, NewBook};
use std::sync::Arc;

/// Validation and delegation layer shared by the HTTP and CLI front ends
#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    /// Create a service over an injected store
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new book
    pub async fn create(&self, book: NewBook) -> Result<Book> {
        let book = book.validate()?;
        let id = self.store.insert(&book).await?;
        tracing::info!("Created book {} ({})", id, book.title);
        Ok(Book::from_new(id, book))
    }

    pub async fn list(&self) -> Result<Vec<Book>> {
        tracing::debug!("Listing books");
        Ok(self.store.list_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Book> {
        tracing::debug!("Fetching book {}", id);
        Ok(self.store.get_by_id(id).await?)
    }

    /// Replace every field of an existing book
    pub async fn update(&self, id: i64, book: NewBook) -> Result<Book> {
        let book = book.validate()?;
        self.store.update(id, &book).await?;
        tracing::info!("Updated book {}", id);
        Ok(Book::from_new(id, book))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete(id).await?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }

    /// Books whose `field` contains `value`, ignoring case
    pub async fn search(&self, field: &str, value: &str) -> Result<Vec<Book>> {
        let field: BookField = field.parse()?;
        let needle = value.to_lowercase();
        tracing::debug!("Searching {} for {:?}", field, value);

        let books = self
            .store
            .list_all()
            .await?
            .into_iter()
            .filter(|book| book.field(field).to_lowercase().contains(&needle))
            .collect();
        Ok(books)
    }

    /// Insert `n` sample books, calling `on_created` after each insert
    pub async fn simulate<F>(&self, n: usize, mut on_created: F) -> Result<Vec<Book>>
    where
        F: FnMut(&Book),
    {
        let mut created = Vec::new();
        for book in sample_books(n) {
            let book = self.create(book).await?;
            on_created(&book);
            created.push(book);
        }
        tracing::info!("Simulated {} books", created.len());
        Ok(created)
    }
}
