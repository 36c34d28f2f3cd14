//! Application state

use anyhow::{Context, Result};
use books_core::{BookService, BookStore, SqliteStore};
use std::path::Path;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Book service wrapping the shared store
    pub service: BookService,
}

impl AppState {
    /// Create state over an existing service
    pub fn new(service: BookService) -> Self {
        Self { service }
    }

    /// Open the SQLite database at `db_path` and make sure the schema exists
    pub async fn open(db_path: &Path) -> Result<Self> {
        let store = SqliteStore::open(db_path)
            .with_context(|| format!("Failed to open database {}", db_path.display()))?;
        store
            .ensure_schema()
            .await
            .context("Failed to create the books table")?;

        Ok(Self::new(BookService::new(Arc::new(store))))
    }
}
