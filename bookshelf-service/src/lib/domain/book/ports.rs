use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Page;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::user::models::UserId;

/// Port for book domain service operations.
///
/// Every operation is scoped to `owner`; books of other users behave as if
/// they did not exist.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Add a book to the owner's shelf.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_book(&self, owner: UserId, command: CreateBookCommand)
        -> Result<Book, BookError>;

    /// Retrieve one of the owner's books.
    ///
    /// # Errors
    /// * `NotFound` - No such book on the owner's shelf
    /// * `DatabaseError` - Database operation failed
    async fn get_book(&self, owner: UserId, id: BookId) -> Result<Book, BookError>;

    /// List the owner's books, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_books(&self, owner: UserId, page: Page) -> Result<Vec<Book>, BookError>;

    /// Apply a partial update to one of the owner's books.
    ///
    /// # Errors
    /// * `NotFound` - No such book on the owner's shelf
    /// * `DatabaseError` - Database operation failed
    async fn update_book(
        &self,
        owner: UserId,
        id: BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError>;
}

/// Persistence operations for books.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist a new book.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Retrieve a book by identifier, regardless of owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve a window of the books owned by `owner`, ordered by creation
    /// time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: UserId, page: Page) -> Result<Vec<Book>, BookError>;

    /// Overwrite title, author and description of an existing book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;
}
