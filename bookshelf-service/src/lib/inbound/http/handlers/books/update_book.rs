use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::BookData;
use super::ParseBookRequestError;
use super::ShelfResponse;
use crate::domain::book::models::BookAuthor;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::UpdateBookCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(book_id): Path<String>,
    Json(body): Json<UpdateBookRequest>,
) -> Result<ApiSuccess<ShelfResponse<BookData>>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .book_service
        .update_book(user.id, book_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, ShelfResponse::success(book.into())))
}

/// Partial update; omitted fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookRequest {
    title: Option<String>,
    author: Option<String>,
    description: Option<String>,
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, ParseBookRequestError> {
        Ok(UpdateBookCommand {
            title: self.title.map(BookTitle::new).transpose()?,
            author: self.author.map(BookAuthor::new).transpose()?,
            description: self.description,
        })
    }
}
