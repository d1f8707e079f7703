use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::{Next, from_fn, from_fn_with_state},
    response::IntoResponse,
    routing::get,
};

use trustgate_auth::{Role, SigningKey, VerifiedIdentity};
use trustgate_issuer::{InMemoryCredentialStore, TokenIssuer};

use crate::allowlist::PublicPaths;
use crate::authz;
use crate::config::GatewayConfig;
use crate::middleware::{self, ValidatorState};

/// Build the full gateway router (shared by `main.rs` and black-box tests).
///
/// Single-issuer deployment: the login routes are mounted in-process and
/// share the gateway's key material, so `/auth/login` is served from the same
/// perimeter the tokens come back through.
pub fn build_app(cfg: GatewayConfig) -> anyhow::Result<Router> {
    let key = Arc::new(SigningKey::from_base64(&cfg.jwt_secret)?);
    let public_paths = Arc::new(cfg.public_paths);

    let store = InMemoryCredentialStore::seeded()?;
    let issuer = Arc::new(TokenIssuer::new(store, (*key).clone(), cfg.token_ttl));

    let admin = Router::new()
        .route("/allowlist", get(get_allowlist))
        .layer(from_fn(|req: Request, next: Next| {
            authz::require_role(Role::Admin, req, next)
        }));

    // Protected routes: the authorization stage turns anonymous access into 401.
    let protected = Router::new()
        .route("/whoami", get(whoami))
        .route("/downstream/headers", get(downstream_headers))
        .nest("/admin", admin)
        .layer(from_fn(authz::require_identity));

    let validator = ValidatorState {
        key,
        public_paths: public_paths.clone(),
    };

    Ok(Router::new()
        .route("/health", get(health))
        .nest("/auth", trustgate_issuer::routes::router(issuer))
        .merge(protected)
        .layer(Extension(public_paths))
        .layer(from_fn_with_state(validator, middleware::validate_request)))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn whoami(Extension(identity): Extension<VerifiedIdentity>) -> impl IntoResponse {
    Json(serde_json::json!({
        "username": identity.username,
        "roles": identity.roles.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
    }))
}

/// Stand-in for a downstream service: echoes the propagated identity headers
/// exactly as a service behind the gateway would receive them.
async fn downstream_headers(headers: HeaderMap) -> impl IntoResponse {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };

    Json(serde_json::json!({
        "authenticated_user": header(middleware::AUTHENTICATED_USER_HEADER),
        "roles": header(middleware::ROLES_HEADER),
    }))
}

async fn get_allowlist(Extension(paths): Extension<Arc<PublicPaths>>) -> impl IntoResponse {
    Json(serde_json::json!({ "public_paths": paths.prefixes() }))
}
