use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Claim set embedded in a token.
///
/// Built once per login by the issuer and never mutated afterwards. On the
/// wire this is the standard JWT payload `{sub, roles, iat, exp}` with
/// numeric `iat`/`exp`, so any stock JWT client can consume the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Subject (the authenticated username).
    #[serde(rename = "sub")]
    pub subject: String,

    /// Roles granted to the subject.
    pub roles: Vec<Role>,

    /// Issued-at timestamp.
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl ClaimSet {
    /// Build a fresh claim set valid for `ttl` starting at `now`.
    ///
    /// Wire precision for `iat`/`exp` is whole seconds, so timestamps are
    /// truncated here; a decoded claim set compares equal to the minted one.
    pub fn new(
        subject: impl Into<String>,
        roles: Vec<Role>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let issued_at = truncate_to_seconds(now);
        Self {
            subject: subject.into(),
            roles,
            issued_at,
            expires_at: truncate_to_seconds(issued_at + ttl),
        }
    }

    /// Explicit expiry check, paired with a fresh clock read by the caller.
    ///
    /// `codec::decode` never looks at `exp`; issuer-side code has no use for
    /// it and validator-side code must decide against its own clock.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

fn truncate_to_seconds(t: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(t.timestamp(), 0).unwrap_or(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_truncated_to_whole_seconds() {
        let now = Utc::now();
        let claims = ClaimSet::new("admin", vec![Role::Admin], now, Duration::minutes(30));

        assert_eq!(claims.issued_at.timestamp_subsec_nanos(), 0);
        assert_eq!(claims.expires_at.timestamp_subsec_nanos(), 0);
        assert_eq!(
            (claims.expires_at - claims.issued_at).num_minutes(),
            30
        );
    }

    #[test]
    fn expiry_is_checked_against_the_supplied_clock() {
        let now = Utc::now();
        let claims = ClaimSet::new("user", vec![Role::User], now, Duration::minutes(5));

        assert!(!claims.is_expired(now));
        assert!(!claims.is_expired(now + Duration::minutes(4)));
        assert!(claims.is_expired(now + Duration::minutes(6)));
    }

    #[test]
    fn wire_shape_uses_standard_jwt_claim_names() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = ClaimSet::new("admin", vec![Role::Admin], now, Duration::seconds(3600));

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], "admin");
        assert_eq!(json["roles"], serde_json::json!(["ADMIN"]));
        assert_eq!(json["iat"], 1_700_000_000i64);
        assert_eq!(json["exp"], 1_700_003_600i64);
    }
}
