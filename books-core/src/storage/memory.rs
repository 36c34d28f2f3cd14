use super::{BookStore, StorageResult};
use crate::error::StorageError;
use crate::types::{Book, NewBook};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory book store (for testing)
///
/// Ids come from a counter that only moves forward, so a deleted id is never
/// handed out again, matching `AUTOINCREMENT`.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    last_id: i64,
    rows: BTreeMap<i64, Book>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn ensure_schema(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn insert(&self, book: &NewBook) -> StorageResult<i64> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, Book::from_new(id, book.clone()));
        Ok(id)
    }

    async fn list_all(&self) -> StorageResult<Vec<Book>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> StorageResult<Book> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn update(&self, id: i64, book: &NewBook) -> StorageResult<()> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id).ok_or(StorageError::NotFound(id))?;
        *row = Book::from_new(id, book.clone());
        Ok(())
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();

        let id = store
            .insert(&NewBook::new("Dune", "Herbert", "SciFi"))
            .await
            .unwrap();
        assert_eq!(store.get_by_id(id).await.unwrap().title, "Dune");

        store.delete(id).await.unwrap();
        assert!(matches!(
            store.get_by_id(id).await,
            Err(StorageError::NotFound(_))
        ));

        // Ids are not reused after delete
        let next = store
            .insert(&NewBook::new("Emma", "Austen", "Classic"))
            .await
            .unwrap();
        assert!(next > id);
    }
}
