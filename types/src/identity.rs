//! Stable identity key for a signed-in user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The key under which role assignments and verification records are stored.
///
/// Either a wallet address (`0x…`) or an auth-provider user id — the core
/// treats both as an opaque string and compares them exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for logs and UI badges: first 6 + last 4 characters.
    ///
    /// Short keys are returned unchanged. Counts characters, not bytes, so
    /// non-ASCII provider ids abbreviate cleanly.
    pub fn short(&self) -> String {
        let total = self.0.chars().count();
        if total <= 10 {
            return self.0.clone();
        }
        let head: String = self.0.chars().take(6).collect();
        let tail: String = self.0.chars().skip(total - 4).collect();
        format!("{head}...{tail}")
    }

    /// Whether the key is usable as a store key.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IdentityKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for IdentityKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
