//! Gate decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an access check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

/// Why an action was denied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The identity has not chosen a role yet.
    NoRole,
    /// The identity's role does not match the action's required role.
    WrongRole,
    /// The identity has not completed verification.
    Unverified,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::NoRole => "no_role",
            DenyReason::WrongRole => "wrong_role",
            DenyReason::Unverified => "unverified",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
