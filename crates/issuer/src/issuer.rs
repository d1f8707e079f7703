use chrono::{Duration, Utc};
use thiserror::Error;

use trustgate_auth::{ClaimSet, SigningKey, TokenError, encode};

use crate::password::{self, PasswordError};
use crate::store::{CredentialStore, StoreError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] TokenError),
}

/// Turns a username/password pair into a signed bearer token.
///
/// Stateless: nothing is retained per token, so revocation before natural
/// expiry is unsupported. That is the stated limitation of the scheme, not an
/// oversight.
pub struct TokenIssuer<S> {
    store: S,
    key: SigningKey,
    ttl: Duration,
}

impl<S: CredentialStore> TokenIssuer<S> {
    pub fn new(store: S, key: SigningKey, ttl: Duration) -> Self {
        Self { store, key, ttl }
    }

    /// Authenticate against the credential store and mint a token embedding
    /// the subject and its role.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let credential = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        password::verify_password(password, &credential.password_hash).map_err(|e| match e {
            PasswordError::VerificationFailed => AuthError::InvalidCredentials,
            other => {
                // A corrupt stored hash looks like a bad password to the
                // caller; the operator gets the real reason.
                tracing::error!("stored hash rejected for '{username}': {other}");
                AuthError::InvalidCredentials
            }
        })?;

        let claims = ClaimSet::new(username, vec![credential.role], Utc::now(), self.ttl);
        Ok(encode(&claims, &self.key)?)
    }
}
