use std::collections::HashMap;
use std::future::Future;

use thiserror::Error;

use trustgate_auth::Role;

use crate::password::{self, PasswordError};

/// Credential record as held by the store.
///
/// Immutable outside administrative provisioning; the issuer only ever reads.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}

/// Credential lookup boundary.
///
/// The lookup is the only suspending operation in the whole login path. Real
/// deployments back this with a database; dev binaries and tests use
/// [`InMemoryCredentialStore`].
pub trait CredentialStore: Send + Sync + 'static {
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<Credential>, StoreError>> + Send;
}

/// In-memory credential store, read-only after construction.
#[derive(Debug)]
pub struct InMemoryCredentialStore {
    by_username: HashMap<String, Credential>,
}

impl InMemoryCredentialStore {
    pub fn new(credentials: impl IntoIterator<Item = Credential>) -> Self {
        Self {
            by_username: credentials
                .into_iter()
                .map(|c| (c.username.clone(), c))
                .collect(),
        }
    }

    /// Store seeded the way first-boot provisioning does it:
    /// `admin/admin` with the ADMIN role and `user/user` with USER.
    pub fn seeded() -> Result<Self, PasswordError> {
        Ok(Self::new([
            Credential {
                username: "admin".to_string(),
                password_hash: password::hash_password("admin")?,
                role: Role::Admin,
            },
            Credential {
                username: "user".to_string(),
                password_hash: password::hash_password("user")?,
                role: Role::User,
            },
        ]))
    }
}

impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        Ok(self.by_username.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_holds_both_provisioned_accounts() {
        let store = InMemoryCredentialStore::seeded().unwrap();

        let admin = store.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(password::verify_password("admin", &admin.password_hash).is_ok());

        let user = store.find_by_username("user").await.unwrap().unwrap();
        assert_eq!(user.role, Role::User);

        assert!(store.find_by_username("mallory").await.unwrap().is_none());
    }
}
