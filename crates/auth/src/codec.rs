//! Symmetric encode/decode of a [`ClaimSet`] (HS256 compact serialization).
//!
//! Decoding verifies the signature only. Expiry is deliberately left to the
//! caller (`ClaimSet::is_expired`) so this module never touches a wall clock.

use jsonwebtoken::{Algorithm, Header, Validation, errors::ErrorKind};
use thiserror::Error;

use crate::{ClaimSet, SigningKey};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Wrong number of segments, bad Base64, or missing/mistyped payload fields.
    #[error("token is structurally invalid")]
    Malformed,

    /// The transmitted signature does not verify against the key.
    #[error("token signature does not verify")]
    InvalidSignature,
}

/// Sign `claims` into a compact `header.payload.signature` token string.
///
/// Deterministic for identical claims and key.
pub fn encode(claims: &ClaimSet, key: &SigningKey) -> Result<String, TokenError> {
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, key.encoding())
        .map_err(|_| TokenError::Malformed)
}

/// Verify the signature of `token` and parse its payload.
///
/// Any failure collapses into [`TokenError`]; nothing here panics or leaks
/// library internals to callers.
pub fn decode(token: &str, key: &SigningKey) -> Result<ClaimSet, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<ClaimSet>(token, key.decoding(), &validation).map_err(
        |e| match e.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        },
    )?;

    Ok(data.claims)
}
