use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use trustgate_auth::{SigningKey, VerifiedIdentity, decode};

use crate::allowlist::PublicPaths;

/// Identity headers minted by the gateway and trusted downstream.
pub const AUTHENTICATED_USER_HEADER: &str = "x-authenticated-user";
pub const ROLES_HEADER: &str = "x-roles";

#[derive(Clone)]
pub struct ValidatorState {
    pub key: Arc<SigningKey>,
    pub public_paths: Arc<PublicPaths>,
}

/// Perimeter validation stage, run once per inbound request.
///
/// This stage never rejects. A missing, malformed, forged, or expired token
/// forwards the request anonymously; the authorization stage downstream maps
/// anonymous access to a protected path to 401.
pub async fn validate_request(
    State(state): State<ValidatorState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    // Identity headers are minted here and only here; drop whatever the
    // client sent so nothing can be smuggled through the perimeter.
    req.headers_mut().remove(AUTHENTICATED_USER_HEADER);
    req.headers_mut().remove(ROLES_HEADER);

    if state.public_paths.is_public(req.uri().path()) {
        return next.run(req).await;
    }

    let Some(token) = extract_bearer(req.headers()) else {
        return next.run(req).await;
    };

    let claims = match decode(token, &state.key) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("discarding presented token: {e}");
            return next.run(req).await;
        }
    };

    if claims.is_expired(Utc::now()) {
        tracing::debug!("discarding expired token for '{}'", claims.subject);
        return next.run(req).await;
    }

    attach_identity(&mut req, VerifiedIdentity::from_claims(&claims));
    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    (!token.is_empty()).then_some(token)
}

/// Attach the identity as both the propagated header pair (visible to
/// downstream services) and an in-process request extension (used by the
/// same-process authorization stage).
fn attach_identity(req: &mut axum::http::Request<axum::body::Body>, identity: VerifiedIdentity) {
    let roles = identity
        .roles
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(",");

    // Subject and roles came out of a verified token; if they still cannot
    // form header values, forward anonymously rather than fault.
    let (Ok(user), Ok(roles)) = (
        HeaderValue::from_str(&identity.username),
        HeaderValue::from_str(&roles),
    ) else {
        tracing::debug!("identity not representable as headers; forwarding anonymously");
        return;
    };

    req.headers_mut().insert(AUTHENTICATED_USER_HEADER, user);
    req.headers_mut().insert(ROLES_HEADER, roles);
    req.extensions_mut().insert(identity);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_or_malformed_authorization_yields_none() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
        assert_eq!(extract_bearer(&headers_with_auth("Basic dXNlcg==")), None);
        assert_eq!(extract_bearer(&headers_with_auth("Bearer ")), None);
        assert_eq!(extract_bearer(&headers_with_auth("bearer abc")), None);
    }
}
