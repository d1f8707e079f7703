use jsonwebtoken::{DecodingKey, EncodingKey};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("signing key is not valid base64: {0}")]
    InvalidKey(String),
}

/// Shared HMAC key material, decoded once from Base64 configuration.
///
/// The issuer and the gateway must be configured with byte-identical secret
/// material or every token is rejected; that shared secret is the single
/// trust anchor of the whole scheme.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Decode a Base64-encoded secret into usable key material.
    ///
    /// Fails closed at configuration time rather than at request time.
    pub fn from_base64(secret: &str) -> Result<Self, KeyError> {
        let encoding = EncodingKey::from_base64_secret(secret)
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;
        let decoding = DecodingKey::from_base64_secret(secret)
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;

        Ok(Self { encoding, decoding })
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Never log key material.
        f.write_str("SigningKey(..)")
    }
}
