use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;

use crate::issuer::{AuthError, TokenIssuer};
use crate::store::CredentialStore;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Issuer routes; callers mount this under `/auth`.
pub fn router<S: CredentialStore>(issuer: Arc<TokenIssuer<S>>) -> Router {
    Router::new()
        .route("/login", post(login::<S>))
        .with_state(issuer)
}

async fn login<S: CredentialStore>(
    State(issuer): State<Arc<TokenIssuer<S>>>,
    Json(body): Json<LoginRequest>,
) -> Response {
    match issuer.login(&body.username, &body.password).await {
        // The raw token string is the whole response body.
        Ok(token) => (StatusCode::OK, token).into_response(),
        Err(e @ (AuthError::UserNotFound | AuthError::InvalidCredentials)) => {
            // Identical status and body for both failure modes, so a response
            // never reveals whether the username exists.
            tracing::debug!("login rejected for '{}': {e}", body.username);
            json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "invalid username or password",
            )
        }
        Err(e) => {
            tracing::error!("login failed: {e}");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            )
        }
    }
}

fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
