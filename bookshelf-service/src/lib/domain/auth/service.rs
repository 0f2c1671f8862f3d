use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::Rejection;
use crate::domain::auth::models::bearer_token;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::ports::UserRepository;

/// Login and per-request identity resolution.
///
/// Each operation performs at most one user lookup. Nothing is cached between
/// calls; the only shared state is the read-only `Authenticator`.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

fn reject(reason: Rejection, subject: &str) -> AuthError {
    tracing::warn!(reason = %reason, subject = %subject, "Credentials rejected");
    AuthError::InvalidCredentials(reason)
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        // Invalid usernames skip the lookup but still pay for a verification.
        // The shortcut exposes only the syntax of the caller's own input,
        // never whether an account exists.
        let user = match Username::new(username.to_string()) {
            Ok(valid) => self.repository.find_by_username(&valid).await?,
            Err(_) => None,
        };

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let password = password.to_string();
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.verify_credentials(&password, stored_hash.as_deref())
        })
        .await
        .map_err(|e| AuthError::Unknown(e.to_string()))?;

        match (outcome, user) {
            (Ok(()), Some(user)) => {
                tracing::info!(user_id = %user.id, username = %user.username, "User authenticated");
                Ok(user)
            }
            (Err(AuthenticationError::PasswordMismatch), _) => {
                Err(reject(Rejection::PasswordMismatch, username))
            }
            (Err(AuthenticationError::PasswordError(e)), _) => {
                tracing::error!(
                    username = %username,
                    error = %e,
                    audit = true,
                    "Stored password hash failed to parse; possible data corruption"
                );
                Err(AuthError::CorruptPasswordHash(username.to_string()))
            }
            // UnknownAccount; success is only possible with a stored hash.
            _ => Err(reject(Rejection::UnknownUser, username)),
        }
    }

    fn issue_session(&self, user: &User) -> Result<AccessToken, AuthError> {
        let token = self
            .authenticator
            .issue_token(user.username.as_str())
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        Ok(AccessToken {
            token,
            expires_in: self.authenticator.token_ttl_seconds(),
        })
    }

    async fn resolve(&self, authorization: Option<&str>) -> Result<User, AuthError> {
        let token = authorization
            .and_then(bearer_token)
            .ok_or(AuthError::MissingCredentials)?;

        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|e| reject(Rejection::from(&e), "<token>"))?;

        let username = Username::new(claims.sub.clone())
            .map_err(|_| reject(Rejection::UnknownSubject, &claims.sub))?;

        self.repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| reject(Rejection::UnknownSubject, &claims.sub))
    }
}
