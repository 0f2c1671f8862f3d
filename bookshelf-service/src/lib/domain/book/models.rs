use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::book::errors::BookFieldError;
use crate::domain::book::errors::BookIdError;
use crate::domain::user::models::UserId;

/// A book record on a user's shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author: BookAuthor,
    pub description: String,
    pub owner: UserId,
    pub created_at: DateTime<Utc>,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const MAX_FIELD_LENGTH: usize = 255;

fn required_text(field: &'static str, value: String) -> Result<String, BookFieldError> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        Err(BookFieldError::Empty { field })
    } else if length > MAX_FIELD_LENGTH {
        Err(BookFieldError::TooLong {
            field,
            max: MAX_FIELD_LENGTH,
            actual: length,
        })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Book title: non-empty, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: String) -> Result<Self, BookFieldError> {
        required_text("Title", title).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Book author: non-empty, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: String) -> Result<Self, BookFieldError> {
        required_text("Author", author).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to add a book to a shelf
#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: BookTitle,
    pub author: BookAuthor,
    pub description: String,
}

/// Command to update a book.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateBookCommand {
    pub title: Option<BookTitle>,
    pub author: Option<BookAuthor>,
    pub description: Option<String>,
}

/// Offset/limit window for listing books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    /// Build a page, clamping negative offsets to zero and the limit to
    /// `1..=MAX_LIMIT`.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trimmed() {
        let title = BookTitle::new("  Dune ".to_string()).unwrap();
        assert_eq!(title.as_str(), "Dune");
    }

    #[test]
    fn test_title_empty() {
        assert_eq!(
            BookTitle::new("   ".to_string()),
            Err(BookFieldError::Empty { field: "Title" })
        );
    }

    #[test]
    fn test_author_too_long() {
        assert_eq!(
            BookAuthor::new("x".repeat(256)),
            Err(BookFieldError::TooLong {
                field: "Author",
                max: 255,
                actual: 256
            })
        );
    }

    #[test]
    fn test_page_defaults_and_clamping() {
        assert_eq!(Page::default(), Page { offset: 0, limit: 10 });
        assert_eq!(Page::new(Some(-5), Some(0)), Page { offset: 0, limit: 1 });
        assert_eq!(
            Page::new(Some(20), Some(1000)),
            Page {
                offset: 20,
                limit: 100
            }
        );
    }
}
