use crate::jwt::Claims;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// handling.
///
/// Holds a decoy hash produced with the same cost parameters as real hashes.
/// Verifying against it when an account does not exist makes the
/// unknown-account path cost the same as a wrong password.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    decoy_hash: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("No account for the supplied identifier")]
    UnknownAccount,

    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// Computes the decoy hash up front, so construction costs one hash.
    ///
    /// # Errors
    /// * `PasswordError` - Decoy hashing failed
    pub fn new(
        password_hasher: PasswordHasher,
        token_codec: TokenCodec,
    ) -> Result<Self, PasswordError> {
        let decoy_hash = password_hasher.hash("decoy-credential")?;

        Ok(Self {
            password_hasher,
            token_codec,
            decoy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against the stored hash of an account.
    ///
    /// `stored_hash` is `None` when the account does not exist; the password
    /// is then verified against the decoy hash and the result discarded.
    ///
    /// # Errors
    /// * `UnknownAccount` - No stored hash was supplied
    /// * `PasswordMismatch` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    pub fn verify_credentials(
        &self,
        password: &str,
        stored_hash: Option<&str>,
    ) -> Result<(), AuthenticationError> {
        let Some(stored_hash) = stored_hash else {
            let _ = self.password_hasher.verify(password, &self.decoy_hash);
            return Err(AuthenticationError::UnknownAccount);
        };

        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::PasswordMismatch)
        }
    }

    /// Issue an access token for `subject`.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<String, TokenError> {
        self.token_codec.issue(subject)
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `TokenError` - Token is malformed, forged or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_codec.verify(token)
    }

    /// Token lifetime in seconds.
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_codec.ttl().num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(
            PasswordHasher::with_params(1024, 1, 1).unwrap(),
            TokenCodec::new(b"test_secret_key_at_least_32_bytes!", Duration::minutes(30)),
        )
        .expect("Failed to build authenticator")
    }

    #[test]
    fn test_verify_credentials_success() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("my_password").unwrap();

        assert!(authenticator
            .verify_credentials("my_password", Some(&hash))
            .is_ok());
    }

    #[test]
    fn test_verify_credentials_wrong_password() {
        let authenticator = authenticator();
        let hash = authenticator.hash_password("my_password").unwrap();

        let result = authenticator.verify_credentials("wrong_password", Some(&hash));
        assert!(matches!(result, Err(AuthenticationError::PasswordMismatch)));
    }

    #[test]
    fn test_verify_credentials_unknown_account() {
        let authenticator = authenticator();

        let result = authenticator.verify_credentials("decoy-credential", None);
        assert!(matches!(result, Err(AuthenticationError::UnknownAccount)));
    }

    #[test]
    fn test_verify_credentials_corrupt_hash() {
        let authenticator = authenticator();

        let result = authenticator.verify_credentials("my_password", Some("not-a-phc-string"));
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(
                PasswordError::MalformedHash(_)
            ))
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = authenticator();

        let token = authenticator.issue_token("alice").unwrap();
        let claims = authenticator.validate_token(&token).unwrap();

        assert_eq!(claims.subject(), "alice");
        assert_eq!(authenticator.token_ttl_seconds(), 30 * 60);
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        assert!(authenticator.validate_token("invalid.token.here").is_err());
    }
}
