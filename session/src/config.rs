//! Session configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::SessionError;

/// Configuration for the session layer.
///
/// Can be loaded from a TOML file via [`SessionConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Settle delay between role confirmation and dashboard navigation, in
    /// milliseconds. Purely cosmetic (it lets the confirmation UI render);
    /// zero is valid.
    #[serde(default = "default_settle_delay_ms")]
    pub redirect_settle_delay_ms: u64,

    /// Deadline for a single store call, in seconds.
    #[serde(default = "default_store_timeout_secs")]
    pub store_timeout_secs: u64,

    /// The entry-point route. Automatic dashboard redirects only fire from
    /// here; a user who has navigated elsewhere is left alone.
    #[serde(default = "default_entry_path")]
    pub entry_path: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_settle_delay_ms() -> u64 {
    1000
}

fn default_store_timeout_secs() -> u64 {
    10
}

fn default_entry_path() -> String {
    "/".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl SessionConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, SessionError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SessionError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, SessionError> {
        toml::from_str(s).map_err(|e| SessionError::Config(e.to_string()))
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_settle_delay_ms)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            redirect_settle_delay_ms: default_settle_delay_ms(),
            store_timeout_secs: default_store_timeout_secs(),
            entry_path: default_entry_path(),
        }
    }
}
