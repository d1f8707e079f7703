use crate::{ClaimSet, Role};

/// Identity derived from a verified, unexpired token.
///
/// Scoped to a single request and threaded through the request context as a
/// value, never held in process-wide state; concurrent requests stay isolated
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub username: String,
    pub roles: Vec<Role>,
}

impl VerifiedIdentity {
    pub fn from_claims(claims: &ClaimSet) -> Self {
        Self {
            username: claims.subject.clone(),
            roles: claims.roles.clone(),
        }
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }
}
