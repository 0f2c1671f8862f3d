use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::user::models::User;

/// Port for authentication and identity resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check a username/password pair.
    ///
    /// Unknown usernames and wrong passwords fail identically and take
    /// comparable time.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password
    /// * `CorruptPasswordHash` - Stored hash is unreadable
    /// * `StorageUnavailable` - User lookup failed
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError>;

    /// Mint an access token for an authenticated user.
    ///
    /// # Errors
    /// * `TokenIssuance` - Token encoding failed
    fn issue_session(&self, user: &User) -> Result<AccessToken, AuthError>;

    /// Resolve the user behind a raw `Authorization` header value.
    ///
    /// # Errors
    /// * `MissingCredentials` - Header absent or not a bearer credential
    /// * `InvalidCredentials` - Token forged, malformed or expired, or its
    ///   subject no longer exists
    /// * `StorageUnavailable` - User lookup failed
    async fn resolve(&self, authorization: Option<&str>) -> Result<User, AuthError>;
}
