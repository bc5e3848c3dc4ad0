//! User roles and their dashboard destinations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The role an identity has chosen for itself.
///
/// Exactly one assignment per identity; re-selection overwrites it
/// (last write wins).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tenant,
    Landlord,
}

impl Role {
    /// Stable wire/storage form of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tenant => "tenant",
            Role::Landlord => "landlord",
        }
    }

    /// The dashboard route a freshly connected user of this role lands on.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Tenant => "/tenants",
            Role::Landlord => "/landlords",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0:?} (expected \"tenant\" or \"landlord\")")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tenant" => Ok(Role::Tenant),
            "landlord" => Ok(Role::Landlord),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for role in [Role::Tenant, Role::Landlord] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("admin".parse::<Role>().is_err());
        assert!("Tenant".parse::<Role>().is_err());
    }

    #[test]
    fn dashboard_paths_match_route_table() {
        assert_eq!(Role::Tenant.dashboard_path(), "/tenants");
        assert_eq!(Role::Landlord.dashboard_path(), "/landlords");
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Landlord).unwrap(), "\"landlord\"");
        let role: Role = serde_json::from_str("\"tenant\"").unwrap();
        assert_eq!(role, Role::Tenant);
    }
}
