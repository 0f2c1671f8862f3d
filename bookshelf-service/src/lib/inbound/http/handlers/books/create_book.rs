use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::BookData;
use super::ParseBookRequestError;
use super::ShelfResponse;
use crate::domain::book::models::BookAuthor;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Json(body): Json<CreateBookRequest>,
) -> Result<ApiSuccess<ShelfResponse<BookData>>, ApiError> {
    state
        .book_service
        .create_book(user.id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, ShelfResponse::success(book.into())))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    #[serde(default)]
    description: String,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, ParseBookRequestError> {
        Ok(CreateBookCommand {
            title: BookTitle::new(self.title)?,
            author: BookAuthor::new(self.author)?,
            description: self.description,
        })
    }
}
