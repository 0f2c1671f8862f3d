use axum::async_trait;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Exchange a username and password for a bearer token.
///
/// Accepts either a JSON body or an OAuth2 password-grant form.
pub async fn login(
    State(state): State<AppState>,
    LoginRequest { username, password }: LoginRequest,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let user = state.auth_service.authenticate(&username, &password).await?;
    let token = state.auth_service.issue_session(&user)?;

    tracing::info!(user_id = %user.id, username = %user.username, "Login succeeded");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: token.token,
            token_type: "bearer".to_string(),
            expires_in: token.expires_in,
        },
    ))
}

/// Login credentials. Extra OAuth2 form fields (`grant_type`, `scope`,
/// `client_id`) are ignored.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[async_trait]
impl<S> FromRequest<S> for LoginRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(body) = Form::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;
            Ok(body)
        } else {
            let Json(body) = Json::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;
            Ok(body)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}
