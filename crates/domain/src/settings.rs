//! Client Settings Domain Model
//!
//! Defines the tunable settings of the Courier client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default dispatch timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Settings for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Upper bound on a single dispatch, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent sent when the request does not set one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of redirects to follow.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_user_agent() -> String {
    concat!("Courier/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_max_redirects() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ClientSettings {
    /// Returns the timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            log_level: default_log_level(),
        }
    }
}
