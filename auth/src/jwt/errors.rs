use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are kept distinct for audit logging. Callers must
/// collapse them into a single "unauthenticated" signal before anything
/// reaches a client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,
}
