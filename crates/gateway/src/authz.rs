//! Authorization stage, distinct from token validation.
//!
//! The validator only derives an identity; the decision to reject happens
//! here. These two rejections are the only ones the perimeter ever makes:
//! anonymous access to a protected path (401) and a missing role (403).

use axum::{http::StatusCode, middleware::Next, response::Response};

use trustgate_auth::{Role, VerifiedIdentity};

use crate::errors::json_error;

/// Reject requests that reached a protected route without an identity.
pub async fn require_identity(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if req.extensions().get::<VerifiedIdentity>().is_none() {
        return json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "authentication required",
        );
    }

    next.run(req).await
}

/// Reject requests whose identity lacks `role`.
///
/// Layered inside [`require_identity`], so an absent identity still maps to
/// 401 rather than 403.
pub async fn require_role(
    role: Role,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    match req.extensions().get::<VerifiedIdentity>() {
        None => json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "authentication required",
        ),
        Some(identity) if !identity.has_role(&role) => json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            format!("missing required role {role}"),
        ),
        Some(_) => next.run(req).await,
    }
}
