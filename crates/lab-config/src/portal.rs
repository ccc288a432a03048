//! Result portal endpoint configuration.

use serde::{Deserialize, Serialize};

/// Lookup form endpoint of the external results portal.
pub const DEFAULT_PORTAL_URL: &str = "https://securelink.labmed.uw.edu/cascadia/result";

fn default_url() -> String {
    DEFAULT_PORTAL_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("labsync/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortalConfig {
    /// Form POST target for result lookups.
    #[serde(default = "default_url")]
    pub url: String,

    /// `User-Agent` header sent with every lookup.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl PortalConfig {
    pub fn is_configured(&self) -> bool {
        let url = self.url.trim();
        url.starts_with("https://") || url.starts_with("http://")
    }
}
