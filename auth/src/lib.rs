//! Authentication primitives for the bookshelf service
//!
//! - Password hashing (Argon2id, configurable cost)
//! - Signed, time-limited bearer tokens (HS256 JWT)
//! - Authentication coordination
//!
//! The service crate owns the user store and the request pipeline; this crate
//! only knows about secrets, hashes and tokens.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_params(1024, 1, 1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let token = codec.issue("alice").unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.subject(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenCodec};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     PasswordHasher::with_params(1024, 1, 1).unwrap(),
//!     TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30)),
//! )
//! .unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! auth.verify_credentials("password123", Some(&hash)).unwrap();
//! let token = auth.issue_token("alice").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.subject(), "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::Clock;
pub use jwt::FixedClock;
pub use jwt::SystemClock;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
