use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::BookData;
use super::ShelfResponse;
use crate::domain::book::models::Page;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Query(query): Query<ListBooksQuery>,
) -> Result<ApiSuccess<ShelfResponse<Vec<BookData>>>, ApiError> {
    let books = state
        .book_service
        .list_books(user.id, Page::new(query.offset, query.limit))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ShelfResponse::success(books.iter().map(BookData::from).collect()),
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBooksQuery {
    offset: Option<i64>,
    limit: Option<i64>,
}
