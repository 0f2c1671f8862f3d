use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use auth::Authenticator;
use auth::FixedClock;
use auth::PasswordHasher;
use auth::TokenCodec;
use bookshelf_service::domain::auth::service::AuthService;
use bookshelf_service::domain::book::errors::BookError;
use bookshelf_service::domain::book::models::Book;
use bookshelf_service::domain::book::models::BookId;
use bookshelf_service::domain::book::models::Page;
use bookshelf_service::domain::book::ports::BookRepository;
use bookshelf_service::domain::book::service::BookService;
use bookshelf_service::domain::user::errors::UserError;
use bookshelf_service::domain::user::models::User;
use bookshelf_service::domain::user::models::UserId;
use bookshelf_service::domain::user::models::Username;
use bookshelf_service::domain::user::ports::UserRepository;
use bookshelf_service::domain::user::service::UserService;
use bookshelf_service::inbound::http::router::create_router;
use chrono::DateTime;
use chrono::Utc;
use serde_json::json;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let book_repository = Arc::new(InMemoryBookRepository::default());

        // Cheap Argon2 parameters keep the suite fast
        let authenticator = Arc::new(
            Authenticator::new(
                PasswordHasher::with_params(1024, 1, 1).unwrap(),
                TokenCodec::new(JWT_SECRET, chrono::Duration::minutes(30)),
            )
            .unwrap(),
        );

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&authenticator),
        ));
        let auth_service = Arc::new(AuthService::new(user_repository, authenticator));
        let book_service = Arc::new(BookService::new(book_repository));

        let router = create_router(
            user_service,
            auth_service,
            book_service,
            Duration::from_secs(30),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
        }
    }

    /// A codec sharing the server's secret whose clock is frozen at `now`.
    pub fn token_codec_at(&self, now: DateTime<Utc>) -> TokenCodec {
        TokenCodec::with_clock(
            JWT_SECRET,
            chrono::Duration::minutes(30),
            Arc::new(FixedClock(now)),
        )
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response.
    pub async fn signup(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/signup")
            .json(&json!({
                "username": username,
                "full_name": "Test User",
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in with JSON credentials and return the response.
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user, log in and return the access token.
    pub async fn signup_and_login(&self, username: &str, password: &str) -> String {
        assert!(self.signup(username, password).await.status().is_success());

        let body: serde_json::Value = self
            .login(username, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}

/// User store backed by a map keyed on username.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        let key = user.username.as_str().to_string();

        if users.contains_key(&key) {
            return Err(UserError::UsernameAlreadyExists(key));
        }

        users.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(username.as_str()).cloned())
    }
}

/// Book store keeping insertion order.
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Mutex<Vec<Book>>,
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: Book) -> Result<Book, BookError> {
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|book| book.id == id)
            .cloned())
    }

    async fn list_by_owner(&self, owner: UserId, page: Page) -> Result<Vec<Book>, BookError> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|book| book.owner == owner)
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut books = self.books.lock().unwrap();

        match books.iter_mut().find(|stored| stored.id == book.id) {
            Some(stored) => {
                *stored = book.clone();
                Ok(book)
            }
            None => Err(BookError::NotFound(book.id)),
        }
    }
}
