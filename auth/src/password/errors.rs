use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid hashing parameters: {0}")]
    InvalidParameters(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a parseable PHC string. This indicates corrupted
    /// data, not a wrong password.
    #[error("Malformed password hash: {0}")]
    MalformedHash(String),
}
