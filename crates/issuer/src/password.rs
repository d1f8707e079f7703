//! Password hashing and verification (Argon2id, PHC strings).
//!
//! Verification goes through the stored salt and a constant-time comparison;
//! plain equality against a stored hash is never an option here.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed")]
    HashingFailed,

    #[error("password verification failed")]
    VerificationFailed,

    #[error("stored hash has an invalid format")]
    InvalidHashFormat,
}

/// Hash a password with a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::HashingFailed)?;

    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash.
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| PasswordError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("admin").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("admin", &hash).is_ok());
        assert_eq!(
            verify_password("not-admin", &hash),
            Err(PasswordError::VerificationFailed)
        );
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_password("admin").unwrap();
        let b = hash_password("admin").unwrap();

        assert_ne!(a, b);
        assert!(verify_password("admin", &a).is_ok());
        assert!(verify_password("admin", &b).is_ok());
    }

    #[test]
    fn corrupt_stored_hash_is_its_own_error() {
        assert_eq!(
            verify_password("admin", "not-a-phc-string"),
            Err(PasswordError::InvalidHashFormat)
        );
    }
}
