use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role granted to an authenticated principal.
///
/// Known roles get their own variant so authorization checks are not
/// stringly-typed; anything else minted into a token payload round-trips
/// through `Unknown` and stays wire-compatible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Unknown(name) => name,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "ADMIN" => Role::Admin,
            "USER" => Role::User,
            other => Role::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Role::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_round_trip_as_plain_strings() {
        let json = serde_json::to_string(&vec![Role::Admin, Role::User]).unwrap();
        assert_eq!(json, r#"["ADMIN","USER"]"#);

        let back: Vec<Role> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Role::Admin, Role::User]);
    }

    #[test]
    fn unrecognized_role_string_falls_back_to_unknown() {
        let role: Role = serde_json::from_str(r#""AUDITOR""#).unwrap();
        assert_eq!(role, Role::Unknown("AUDITOR".to_string()));
        assert_eq!(role.as_str(), "AUDITOR");

        // And serializes back out unchanged.
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""AUDITOR""#);
    }
}
