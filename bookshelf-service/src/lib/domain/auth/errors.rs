use std::fmt;

use auth::TokenError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Why a credential was rejected.
///
/// Recorded in audit logs only. Every variant reaches clients as the same
/// `InvalidCredentials` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnknownUser,
    PasswordMismatch,
    BadSignature,
    MalformedToken,
    ExpiredToken,
    UnknownSubject,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::UnknownUser => "unknown_user",
            Rejection::PasswordMismatch => "password_mismatch",
            Rejection::BadSignature => "bad_signature",
            Rejection::MalformedToken => "malformed_token",
            Rejection::ExpiredToken => "expired_token",
            Rejection::UnknownSubject => "unknown_subject",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&TokenError> for Rejection {
    fn from(err: &TokenError) -> Self {
        match err {
            TokenError::BadSignature => Rejection::BadSignature,
            TokenError::Expired => Rejection::ExpiredToken,
            TokenError::Malformed(_) | TokenError::EncodingFailed(_) => Rejection::MalformedToken,
        }
    }
}

/// Authentication and identity resolution errors.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No Authorization header, or not a bearer credential.
    #[error("Not authenticated")]
    MissingCredentials,

    /// The reason is deliberately left out of the message.
    #[error("Invalid credentials")]
    InvalidCredentials(Rejection),

    /// Stored hash could not be parsed. Data corruption, not a user error.
    #[error("Stored password hash is corrupt for user {0}")]
    CorruptPasswordHash(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DatabaseError(msg) => AuthError::StorageUnavailable(msg),
            other => AuthError::Unknown(other.to_string()),
        }
    }
}
