use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::Page;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for book operations.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }

    async fn owned_book(&self, owner: UserId, id: BookId) -> Result<Book, BookError> {
        match self.repository.find_by_id(id).await? {
            Some(book) if book.owner == owner => Ok(book),
            Some(_) => {
                tracing::debug!(book_id = %id, user_id = %owner, "Book belongs to another user");
                Err(BookError::NotFound(id))
            }
            None => Err(BookError::NotFound(id)),
        }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn create_book(
        &self,
        owner: UserId,
        command: CreateBookCommand,
    ) -> Result<Book, BookError> {
        let book = Book {
            id: BookId::new(),
            title: command.title,
            author: command.author,
            description: command.description,
            owner,
            created_at: Utc::now(),
        };

        let created = self.repository.create(book).await?;
        tracing::info!(book_id = %created.id, user_id = %owner, "Book created");

        Ok(created)
    }

    async fn get_book(&self, owner: UserId, id: BookId) -> Result<Book, BookError> {
        self.owned_book(owner, id).await
    }

    async fn list_books(&self, owner: UserId, page: Page) -> Result<Vec<Book>, BookError> {
        self.repository.list_by_owner(owner, page).await
    }

    async fn update_book(
        &self,
        owner: UserId,
        id: BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        let mut book = self.owned_book(owner, id).await?;

        if let Some(title) = command.title {
            book.title = title;
        }
        if let Some(author) = command.author {
            book.author = author;
        }
        if let Some(description) = command.description {
            book.description = description;
        }

        let updated = self.repository.update(book).await?;
        tracing::info!(book_id = %updated.id, user_id = %owner, "Book updated");

        Ok(updated)
    }
}
