//! Polling schedule configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Twelve hours between reconciliation passes.
const fn default_interval_secs() -> u64 {
    12 * 60 * 60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Seconds between the start of consecutive passes.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl SyncConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_twelve_hours() {
        assert_eq!(SyncConfig::default().interval(), Duration::from_secs(43_200));
    }
}
