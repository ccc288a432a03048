//! # lab-config
//!
//! Layered configuration loading for labsync using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LABSYNC_*` prefix, `__` as separator)
//! 2. An explicit file passed on the command line (`--config`)
//! 3. Project-level `./labsync.toml`
//! 4. User-level `~/.config/labsync/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LABSYNC_DATABASE__PATH` -> `database.path`,
//! `LABSYNC_SYNC__INTERVAL_SECS` -> `sync.interval_secs`, etc.
//!
//! The roster lives in the TOML files as an array of tables:
//!
//! ```toml
//! [[people]]
//! name = "Ada Lovelace"
//! date_of_birth = "12/10/1815"
//! ```

mod database;
mod error;
mod portal;
mod sync;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use portal::{DEFAULT_PORTAL_URL, PortalConfig};
pub use sync::SyncConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use lab_core::RosterEntry;
use serde::{Deserialize, Serialize};

/// File name of the project-local configuration.
pub const PROJECT_CONFIG_FILE: &str = "labsync.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LabConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    /// Known specimen holders, scanned in order.
    #[serde(default)]
    pub people: Vec<RosterEntry>,
}

impl LabConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        // a missing .env is normal outside development
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("LABSYNC_").split("__"))
    }

    /// Reject values that would make every pass fail.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.portal.is_configured() {
            return Err(ConfigError::InvalidValue {
                field: "portal.url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.portal.url),
            });
        }
        if self.sync.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sync.interval_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        for (index, person) in self.people.iter().enumerate() {
            person.validate().map_err(|e| ConfigError::InvalidValue {
                field: format!("people[{index}]"),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("labsync").join("config.toml"))
    }
}
