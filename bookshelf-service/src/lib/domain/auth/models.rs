/// Bearer token handed out after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
}

/// Extract the token from an `Authorization` header value.
///
/// Accepts `Bearer <token>` with the scheme matched case-insensitively.
/// Returns `None` for other schemes, an empty token, or a token containing
/// whitespace.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer")
        || token.is_empty()
        || token.contains(char::is_whitespace)
    {
        return None;
    }

    Some(token)
}
