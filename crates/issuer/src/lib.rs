//! `trustgate-issuer` — authenticates credentials and mints signed bearer tokens.

use std::sync::Arc;

use axum::{Router, http::StatusCode, routing::get};

use trustgate_auth::SigningKey;

pub mod config;
pub mod issuer;
pub mod password;
pub mod routes;
pub mod store;

pub use config::IssuerConfig;
pub use issuer::{AuthError, TokenIssuer};
pub use store::{Credential, CredentialStore, InMemoryCredentialStore, StoreError};

/// Build the standalone issuer router (login + health).
///
/// When deployed behind the gateway the login routes are mounted there
/// instead; this entrypoint exists for running the issuer on its own.
pub fn build_app(cfg: &IssuerConfig) -> anyhow::Result<Router> {
    let key = SigningKey::from_base64(&cfg.jwt_secret)?;
    let store = InMemoryCredentialStore::seeded()?;
    let issuer = Arc::new(TokenIssuer::new(store, key, cfg.token_ttl));

    Ok(Router::new()
        .route("/health", get(health))
        .nest("/auth", routes::router(issuer)))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
