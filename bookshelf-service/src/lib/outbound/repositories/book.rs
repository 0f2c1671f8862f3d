use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookAuthor;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::Page;
use crate::domain::book::ports::BookRepository;
use crate::domain::user::models::UserId;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_book(row: PgRow) -> Result<Book, BookError> {
        let column = |e: sqlx::Error| BookError::DatabaseError(e.to_string());

        Ok(Book {
            id: BookId(row.try_get("id").map_err(column)?),
            title: BookTitle::new(row.try_get("title").map_err(column)?)?,
            author: BookAuthor::new(row.try_get("author").map_err(column)?)?,
            description: row.try_get("description").map_err(column)?,
            owner: UserId(row.try_get("user_id").map_err(column)?),
            created_at: row.try_get("created_at").map_err(column)?,
        })
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, description, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(&book.description)
        .bind(book.owner.0)
        .bind(book.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(book)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author, description, user_id, created_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_book).transpose()
    }

    async fn list_by_owner(&self, owner: UserId, page: Page) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, description, user_id, created_at
            FROM books
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(owner.0)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_book).collect()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, description = $4
            WHERE id = $1
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(&book.description)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(book.id));
        }

        Ok(book)
    }
}
