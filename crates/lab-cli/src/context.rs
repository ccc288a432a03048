use std::sync::Arc;

use anyhow::Context;
use lab_config::LabConfig;
use lab_db::SpecimenStore;
use lab_sync::Roster;

/// Everything a command needs, built once per invocation.
pub struct AppContext {
    pub config: LabConfig,
    pub store: Arc<SpecimenStore>,
    pub roster: Roster,
}

impl AppContext {
    pub async fn init(config: LabConfig) -> anyhow::Result<Self> {
        let store = SpecimenStore::open(&config.database.path)
            .await
            .with_context(|| format!("failed to open database '{}'", config.database.path))?;

        let roster = Roster::new(config.people.clone());
        if roster.is_empty() {
            tracing::warn!("no people configured; add [[people]] entries to labsync.toml");
        }

        Ok(Self {
            config,
            store: Arc::new(store),
            roster,
        })
    }
}
