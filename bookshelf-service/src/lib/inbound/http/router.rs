use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::books::create_book::create_book;
use super::handlers::books::get_book::get_book;
use super::handlers::books::list_books::list_books;
use super::handlers::books::update_book::update_book;
use super::handlers::get_current_user::get_current_user;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::book::ports::BookServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
    book_service: Arc<dyn BookServicePort>,
    request_timeout: Duration,
) -> Router {
    let state = AppState {
        user_service,
        auth_service,
        book_service,
    };

    let public_routes = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/users/me", get(get_current_user))
        .route("/books", get(list_books).post(create_book))
        .route("/books/", get(list_books))
        .route("/books/:book_id", get(get_book).put(update_book))
        .route("/book/:book_id", get(get_book))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Never record headers; Authorization carries the token.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
