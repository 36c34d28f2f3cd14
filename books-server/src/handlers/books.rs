//! Book collection handlers

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use books_core::{Book, NewBook, ServiceError};
use serde::Deserialize;

/// Query parameters for listing books
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    /// Field to search (title, author or genre)
    pub field: Option<String>,

    /// Substring to look for in `field`
    pub value: Option<String>,
}

/// List all books, or the matches of a field search when `field` is given
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> ApiResult<Json<Vec<Book>>> {
    let books = match query.field {
        Some(field) => {
            state
                .service
                .search(&field, query.value.as_deref().unwrap_or_default())
                .await?
        }
        None => state.service.list().await?,
    };
    Ok(Json(books))
}

/// Unwrap a book body, reporting any decoding failure as a validation error
fn book_payload(payload: Result<Json<NewBook>, JsonRejection>) -> ApiResult<NewBook> {
    match payload {
        Ok(Json(book)) => Ok(book),
        Err(rejection) => Err(ServiceError::Validation(rejection.body_text()).into()),
    }
}

/// Create a new book
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let book = state.service.create(book_payload(payload)?).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Book>> {
    Ok(Json(state.service.get(id).await?))
}

/// Replace a book's fields
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    Ok(Json(state.service.update(id, book_payload(payload)?).await?))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
