use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use crate::book::errors::BookFieldError;
use crate::domain::book::models::Book;

pub mod create_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

/// `{"message": "success", "data": ...}` envelope used by the book routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfResponse<T: Serialize + PartialEq> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize + PartialEq> ShelfResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success",
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            description: book.description.clone(),
            user_id: book.owner.to_string(),
            created_at: book.created_at,
        }
    }
}

#[derive(Debug, Clone, Error)]
enum ParseBookRequestError {
    #[error("Invalid book: {0}")]
    Field(#[from] BookFieldError),
}

impl From<ParseBookRequestError> for ApiError {
    fn from(err: ParseBookRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
