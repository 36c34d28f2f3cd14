//! Integration tests for the book service over a SQLite file

use books_core::{Book, BookService, BookStore, NewBook, ServiceError, SqliteStore};
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a service backed by a fresh database in a temporary directory
async fn create_test_service() -> (BookService, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SqliteStore::open(temp_dir.path().join("books.db")).unwrap();
    store.ensure_schema().await.unwrap();
    (BookService::new(Arc::new(store)), temp_dir)
}

#[tokio::test]
async fn test_create_returns_fresh_ids() {
    let (service, _temp_dir) = create_test_service().await;

    let mut ids = HashSet::new();
    for i in 0..5 {
        let book = service
            .create(NewBook::new(format!("Book {i}"), "Author", "Genre"))
            .await
            .unwrap();
        assert!(ids.insert(book.id), "id {} issued twice", book.id);

        let fetched = service.get(book.id).await.unwrap();
        assert_eq!(fetched.title, format!("Book {i}"));
        assert_eq!(fetched.author, "Author");
        assert_eq!(fetched.genre, "Genre");
    }
}

#[tokio::test]
async fn test_update_nonexistent_leaves_table_unchanged() {
    let (service, _temp_dir) = create_test_service().await;
    let existing = service
        .create(NewBook::new("Dune", "Herbert", "SciFi"))
        .await
        .unwrap();

    let err = service
        .update(existing.id + 100, NewBook::new("X", "Y", "Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    assert_eq!(service.list().await.unwrap(), vec![existing]);
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let (service, _temp_dir) = create_test_service().await;
    let book = service
        .create(NewBook::new("Dune", "Herbert", "SciFi"))
        .await
        .unwrap();

    let updated = service
        .update(book.id, NewBook::new("Dune Messiah", "Frank Herbert", "Science Fiction"))
        .await
        .unwrap();
    assert_eq!(updated.id, book.id);
    assert_eq!(service.get(book.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_delete_twice() {
    let (service, _temp_dir) = create_test_service().await;
    let book = service
        .create(NewBook::new("Emma", "Austen", "Classic"))
        .await
        .unwrap();

    service.delete(book.id).await.unwrap();
    assert!(matches!(
        service.delete(book.id).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.get(book.id).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_returns_exactly_inserted_books() {
    let (service, _temp_dir) = create_test_service().await;

    let mut expected = HashSet::new();
    for (title, author, genre) in [
        ("B1", "A1", "G1"),
        ("B2", "A2", "G2"),
        ("B3", "A3", "G3"),
    ] {
        expected.insert(
            service
                .create(NewBook::new(title, author, genre))
                .await
                .unwrap(),
        );
    }

    let listed = service.list().await.unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed.into_iter().collect::<HashSet<Book>>(), expected);
}

#[tokio::test]
async fn test_search_genre_subset() {
    let (service, _temp_dir) = create_test_service().await;
    service.simulate(12, |_| {}).await.unwrap();
    service
        .create(NewBook::new("Stardust", "Gaiman", "urban FANTASY"))
        .await
        .unwrap();

    let all = service.list().await.unwrap();
    let expected: HashSet<_> = all
        .into_iter()
        .filter(|b| b.genre.to_lowercase().contains("fantasy"))
        .collect();

    let found: HashSet<_> = service
        .search("genre", "fantasy")
        .await
        .unwrap()
        .into_iter()
        .collect();
    assert!(!found.is_empty());
    assert_eq!(found, expected);

    assert!(matches!(
        service.search("publisher", "x").await,
        Err(ServiceError::InvalidField(_))
    ));
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("books.db");

    let id = {
        let store = SqliteStore::open(&path).unwrap();
        store.ensure_schema().await.unwrap();
        BookService::new(Arc::new(store))
            .create(NewBook::new("Dune", "Herbert", "SciFi"))
            .await
            .unwrap()
            .id
    };

    let store = SqliteStore::open(&path).unwrap();
    store.ensure_schema().await.unwrap();
    let book = BookService::new(Arc::new(store)).get(id).await.unwrap();
    assert_eq!(book.title, "Dune");
}
